//! Application layer: state, pure transitions, projections and runtime.
//!
//! # Responsibility
//! - Keep all UI state in one `AppState` value.
//! - Route every user action through `update::update`.
//! - Keep hosts (FFI, CLI) free of validation and persistence rules.

pub mod page;
pub mod runtime;
pub mod state;
pub mod update;
pub mod viewer;
