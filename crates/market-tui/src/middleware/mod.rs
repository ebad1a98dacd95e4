use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod form;
pub mod keyboard;
pub mod logging;
pub mod navigation;
pub mod pointer;
pub mod profile_menu;
pub mod thunk;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Anything slow (network calls)
/// is handed to the thunk runtime so the chain never blocks.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
