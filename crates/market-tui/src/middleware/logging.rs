use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
///
/// Enabled by `log_actions` in the configuration (on by default in debug
/// builds).
pub struct LoggingMiddleware {
    enabled: bool,
}

impl LoggingMiddleware {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if self.enabled {
            match action {
                // Raw input is noisy; its translation gets logged instead
                Action::Global(GlobalAction::KeyPressed(_)) | Action::Global(GlobalAction::Click { .. }) => {
                    log::trace!("Action: {:?}", action)
                }
                _ => log::debug!("Action: {:?}", action),
            }
        }

        true // Always pass action through
    }
}
