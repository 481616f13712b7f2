//! Idea vault domain model.
//!
//! # Responsibility
//! - Define the fixed domain catalog and the idea value type.
//! - Define `IdeaStore`, the single unit of persisted state.
//!
//! # Invariants
//! - Ideas are immutable once appended; no edit or delete path exists.

pub mod domain;
pub mod idea;
pub mod idea_store;
