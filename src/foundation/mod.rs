//! Cross-cutting types shared by every stage.

/// Report configuration loaded from JSON or built in code.
pub mod config;
/// Error taxonomy and result alias.
pub mod error;
