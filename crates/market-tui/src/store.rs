use crate::actions::Action;
use crate::background::{spawn_background_worker, SharedState};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock, RwLockReadGuard};
use std::thread::JoinHandle;

/// Store - holds application state and manages the Redux loop
///
/// `dispatch` hands an action to the background worker, which runs the
/// middleware chain. Actions that survive the chain come back on the result
/// channel and are reduced on the calling thread by `process_pending`.
pub struct Store {
    state: SharedState,
    action_tx: Sender<Action>,
    result_rx: Receiver<Action>,
    worker: Option<JoinHandle<()>>,
}

impl Store {
    pub fn new(initial_state: AppState, middleware: Vec<Box<dyn Middleware>>) -> Self {
        let state: SharedState = Arc::new(RwLock::new(initial_state));
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        let worker = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            Arc::clone(&state),
            middleware,
        );

        Self {
            state,
            action_tx,
            result_rx,
            worker: Some(worker),
        }
    }

    /// Read access to the current state
    pub fn state(&self) -> RwLockReadGuard<'_, AppState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Get a dispatcher feeding the middleware chain
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.action_tx.clone())
    }

    /// Send an action through middleware chain and reducer
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Store: background worker is gone: {}", e);
        }
    }

    /// Reduce every action the middleware chain has let through so far
    ///
    /// Returns the number of reduced actions.
    pub fn process_pending(&self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.result_rx.try_recv() {
            self.apply(&action);
            count += 1;
        }
        count
    }

    /// Run the root reducer for one action
    pub fn apply(&self, action: &Action) {
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, action);
    }

    /// Stop the background worker and wait for it
    pub fn shutdown(mut self) {
        // The worker may already have stopped on an earlier Quit
        let _ = self.action_tx.send(Action::Global(crate::actions::GlobalAction::Quit));
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Background worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, HomeAction};
    use std::time::{Duration, Instant};

    fn wait_for(store: &Store, expected: usize) -> usize {
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut reduced = 0;
        while reduced < expected && Instant::now() < deadline {
            reduced += store.process_pending();
            std::thread::sleep(Duration::from_millis(5));
        }
        reduced
    }

    #[test]
    fn test_dispatch_reaches_reducer() {
        let store = Store::new(AppState::default(), Vec::new());
        store.dispatch(Action::Home(HomeAction::Char('4')));
        store.dispatch(Action::Home(HomeAction::Char('2')));

        assert_eq!(wait_for(&store, 2), 2);
        assert_eq!(store.state().home.item_id_input, "42");
        store.shutdown();
    }

    #[test]
    fn test_quit_stops_running() {
        let store = Store::new(AppState::default(), Vec::new());
        store.dispatch(Action::Global(GlobalAction::Quit));
        wait_for(&store, 1);
        assert!(!store.state().running);
    }
}
