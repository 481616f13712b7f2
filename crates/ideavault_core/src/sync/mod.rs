//! Optional remote delegation.
//!
//! Local storage stays the source of truth; an attached remote service only
//! receives newly submitted ideas.

pub mod remote;
