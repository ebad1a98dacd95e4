//! Background worker thread that processes actions through middleware
//!
//! This module implements the background processing architecture where:
//! - Main thread handles rendering, user input and reducing
//! - Background thread runs the middleware chain (which hands network calls
//!   to the thunk runtime)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(RecvError) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        // Get current state snapshot for middleware
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if !run_chain(&mut middleware, &action, &current_state, &dispatcher) {
            continue;
        }

        if result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run an action through the middleware chain
///
/// Returns `false` when a middleware consumed the action.
pub(crate) fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::HomeAction;
    use std::sync::mpsc;
    use std::time::Duration;

    struct ConsumeHome;

    impl Middleware for ConsumeHome {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            !matches!(action, Action::Home(_))
        }
    }

    #[test]
    fn test_worker_forwards_unconsumed_actions_and_stops_on_quit() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(ConsumeHome)],
        );

        action_tx.send(Action::Home(HomeAction::Char('1'))).unwrap();
        action_tx.send(Action::Global(GlobalAction::Refresh)).unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        handle.join().unwrap();

        let forwarded: Vec<Action> = result_rx.try_iter().collect();
        assert_eq!(forwarded.len(), 2);
        assert!(matches!(forwarded[0], Action::Global(GlobalAction::Refresh)));
        assert!(matches!(forwarded[1], Action::Global(GlobalAction::Quit)));
        assert!(result_rx.recv_timeout(Duration::from_millis(10)).is_err());
    }
}
