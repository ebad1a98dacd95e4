//! Remote resource state
//!
//! Every fetched sub-tree (item page, item reviews, orders) follows the same
//! lifecycle: `Unloaded -> Loading -> Loaded | Errored`. Each fetch carries a
//! `RequestId`; responses of requests that were superseded by an already
//! applied newer response, or issued before a teardown, are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier of one outgoing fetch, strictly increasing per process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

/// Shared generator of request ids
#[derive(Debug, Clone, Default)]
pub struct RequestIds {
    next: Arc<AtomicU64>,
}

impl RequestIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id (the first id is 1)
    pub fn next(&self) -> RequestId {
        RequestId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// What the view can show for a resource
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus<T> {
    #[default]
    Unloaded,
    Loading,
    Loaded(T),
    Errored(String),
}

/// A remotely fetched sub-tree plus its request bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub status: FetchStatus<T>,
    /// Highest request id seen starting
    pub(crate) latest_issued: RequestId,
    /// Id of the response currently shown
    pub(crate) latest_applied: RequestId,
    /// Responses with ids up to this one are dropped
    pub(crate) discarded_through: RequestId,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Unloaded,
            latest_issued: RequestId::default(),
            latest_applied: RequestId::default(),
            discarded_through: RequestId::default(),
        }
    }
}

impl<T> Resource<T> {
    /// Loaded data, if any
    pub fn data(&self) -> Option<&T> {
        match &self.status {
            FetchStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a response to `request` may still be applied
    pub(crate) fn accepts(&self, request: RequestId) -> bool {
        request > self.discarded_through && request >= self.latest_applied
    }

    /// Whether there is a request whose response would still be applied
    pub(crate) fn has_pending(&self) -> bool {
        self.latest_issued > self.discarded_through && self.latest_issued > self.latest_applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let ids = RequestIds::new();
        let clone = ids.clone();
        let a = ids.next();
        let b = clone.next();
        assert_eq!(a, RequestId(1));
        assert_eq!(b, RequestId(2));
        assert!(b > a);
    }

    #[test]
    fn test_default_is_unloaded() {
        let resource: Resource<u32> = Resource::default();
        assert_eq!(resource.status, FetchStatus::Unloaded);
        assert!(resource.data().is_none());
        assert!(!resource.has_pending());
    }
}
