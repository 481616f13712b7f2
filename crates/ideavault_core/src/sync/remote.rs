//! Remote idea service capability.
//!
//! # Responsibility
//! - Define the seam a network backend plugs into.
//!
//! # Invariants
//! - Implementations must be synchronous from the caller's view and must not
//!   panic; failures are returned as `RemoteError`.
//! - A remote failure never rolls back local state.

use crate::model::domain::Domain;
use crate::model::idea::Idea;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure envelope returned by remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub service_id: String,
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

impl RemoteError {
    pub fn new(
        service_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        retryable: bool,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            code: code.into(),
            message: message.into(),
            retryable,
        }
    }
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "remote service `{}` failed ({}): {}",
            self.service_id, self.code, self.message
        )
    }
}

impl Error for RemoteError {}

/// Backend that accepts submitted ideas.
pub trait RemoteIdeaService: Send + Sync {
    fn service_id(&self) -> &str;
    fn submit_idea(&self, domain: Domain, idea: &Idea) -> RemoteResult<()>;
}
