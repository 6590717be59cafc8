use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An entry has no first character to group it under.
    #[error("entry at position {position} has an empty display name")]
    EmptyDisplayName { position: usize },
}
