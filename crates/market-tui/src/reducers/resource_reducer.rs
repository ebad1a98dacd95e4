//! Resource Reducer
//!
//! Shared by the item page, item reviews and orders sub-trees. A response is
//! applied only while its request is still current: no newer response has been
//! applied and the issuing view has not been torn down since.
//!
//! Whenever nothing changes the input `Arc` is returned as is.

use std::sync::Arc;

use crate::actions::FetchAction;
use crate::state::{FetchStatus, Resource};

pub fn reduce_resource<T: Clone>(
    state: Arc<Resource<T>>,
    action: &FetchAction<T>,
) -> Arc<Resource<T>> {
    match action {
        FetchAction::Started(id) => {
            if *id <= state.discarded_through {
                return state;
            }
            let mut next = (*state).clone();
            next.latest_issued = next.latest_issued.max(*id);
            next.status = FetchStatus::Loading;
            Arc::new(next)
        }
        FetchAction::Loaded(id, data) => {
            if !state.accepts(*id) {
                log::debug!("Dropping stale response of request {}", id.0);
                return state;
            }
            let mut next = (*state).clone();
            next.latest_applied = *id;
            next.latest_issued = next.latest_issued.max(*id);
            next.status = FetchStatus::Loaded(data.clone());
            Arc::new(next)
        }
        FetchAction::Failed(id, message) => {
            // A failure only surfaces when it belongs to the newest request
            if !state.accepts(*id) || *id < state.latest_issued {
                log::debug!("Dropping stale failure of request {}: {}", id.0, message);
                return state;
            }
            let mut next = (*state).clone();
            next.latest_applied = *id;
            next.status = FetchStatus::Errored(message.clone());
            Arc::new(next)
        }
        FetchAction::Set(data) => {
            let mut next = (*state).clone();
            next.discarded_through = next.latest_issued;
            next.status = FetchStatus::Loaded(data.clone());
            Arc::new(next)
        }
        FetchAction::Clear => {
            if matches!(state.status, FetchStatus::Unloaded) && !state.has_pending() {
                return state;
            }
            let mut next = (*state).clone();
            next.discarded_through = next.latest_issued;
            next.status = FetchStatus::Unloaded;
            Arc::new(next)
        }
        FetchAction::Discard => {
            if !state.has_pending() && !state.is_loading() {
                return state;
            }
            let mut next = (*state).clone();
            next.discarded_through = next.latest_issued;
            if next.is_loading() {
                next.status = FetchStatus::Unloaded;
            }
            Arc::new(next)
        }
    }
}
