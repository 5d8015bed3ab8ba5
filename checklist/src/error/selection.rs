//! Selection error types

/// Errors raised by the store, reconciler and controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// The item list cannot back a check list.
    #[error("Invalid item list: {0}")]
    InvalidConfig(ConfigIssue),

    /// A toggle addressed an item that does not exist.
    #[error("Index {index} out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why an item list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("list is empty")]
    Empty,

    #[error("items {first} and {second} are both marked as the \"all\" sentinel")]
    MultipleSentinels { first: usize, second: usize },

    #[error("items {first} and {second} are both marked as unique")]
    MultipleUnique { first: usize, second: usize },

    #[error("item {sentinel} is an \"all\" sentinel while item {unique} is unique")]
    ConflictingRoles { sentinel: usize, unique: usize },
}

impl From<ConfigIssue> for ChecklistError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfig(issue)
    }
}
