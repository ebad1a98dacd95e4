//! ThunkMiddleware - runs async action creators
//!
//! Consumes `Action::Thunk` and spawns the matching action creator on a tokio
//! runtime owned by this middleware. The creator reports back through the
//! dispatcher, so its follow-up actions re-enter the chain.

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::thunks::Thunks;

pub struct ThunkMiddleware {
    runtime: Runtime,
    thunks: Thunks,
}

impl ThunkMiddleware {
    pub fn new(thunks: Thunks) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("market-thunks")
            .enable_all()
            .build()
            .context("Failed to create the thunk runtime")?;
        Ok(Self { runtime, thunks })
    }
}

impl Middleware for ThunkMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Thunk(thunk) => {
                let task = self.thunks.clone().run(thunk.clone(), dispatcher.clone());
                self.runtime.spawn(task);
                false
            }
            _ => true,
        }
    }
}
