//! Flutter bridge for IdeaVault core.

pub mod api;
