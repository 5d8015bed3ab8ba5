//! Error types

mod config;
mod selection;

pub use config::*;
pub use selection::*;

/// Convenience alias for results of check-list operations.
pub type Result<T> = std::result::Result<T, ChecklistError>;
