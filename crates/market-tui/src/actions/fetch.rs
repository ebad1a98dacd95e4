//! Remote resource actions
//!
//! Shared by every fetched sub-tree (item page, item reviews, orders).

use crate::state::RequestId;

/// Lifecycle actions of a remotely fetched sub-tree
#[derive(Clone)]
pub enum FetchAction<T> {
    /// A fetch was issued
    Started(RequestId),
    /// A fetch succeeded with the given payload
    Loaded(RequestId, T),
    /// A fetch failed with a user-facing message
    Failed(RequestId, String),
    /// Replace the data outright (e.g. with the result of an edit)
    Set(T),
    /// Forget the data
    Clear,
    /// The view reading this sub-tree went away; drop in-flight responses
    Discard,
}

impl<T> std::fmt::Debug for FetchAction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started(id) => write!(f, "Started({})", id.0),
            Self::Loaded(id, _) => write!(f, "Loaded({}, ..)", id.0),
            Self::Failed(id, message) => write!(f, "Failed({}, {})", id.0, message),
            Self::Set(_) => write!(f, "Set(..)"),
            Self::Clear => write!(f, "Clear"),
            Self::Discard => write!(f, "Discard"),
        }
    }
}
