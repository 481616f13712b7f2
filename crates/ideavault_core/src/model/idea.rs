//! Idea value and submission validation errors.
//!
//! # Invariants
//! - Ideas built through `Idea::new` are trimmed and non-empty.
//! - Ideas read back from storage are accepted as persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inline message shown when no domain is selected.
pub const MISSING_DOMAIN_MESSAGE: &str = "Please select a domain before submitting your idea.";
/// Inline message shown when the idea text is blank.
pub const EMPTY_IDEA_MESSAGE: &str = "Please enter your idea before submitting.";

/// User-correctable submission problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingDomain,
    EmptyIdea,
}

impl ValidationError {
    /// Stable error code for logs and host envelopes.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingDomain => "missing_domain",
            Self::EmptyIdea => "empty_idea",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDomain => f.write_str(MISSING_DOMAIN_MESSAGE),
            Self::EmptyIdea => f.write_str(EMPTY_IDEA_MESSAGE),
        }
    }
}

impl Error for ValidationError {}

/// One submitted idea. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Idea(String);

impl Idea {
    /// Builds an idea from raw draft text.
    ///
    /// # Errors
    /// - `ValidationError::EmptyIdea` when the text is blank after trimming.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIdea);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Idea {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Idea {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
