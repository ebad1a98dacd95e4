//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! Keys are resolved in layers:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C quits and Ctrl+P toggles the profile menu from anywhere. While the
//! profile dropdown is open it owns the keyboard.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive characters, Backspace, Enter and Tab as
//! generic text input / navigation actions.
//!
//! ## Layer 3: View bindings, then global bindings
//! The active view gets the first chance to bind a key; unbound keys fall back
//! to the global single-key bindings.
//!
//! Generic `Navigate` and `TextInput` actions are translated here as well,
//! by asking the active view for its screen-specific action.

use crate::actions::{Action, GlobalAction, NavigationAction, ProfileMenuAction, StatusBarAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::route::Route;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE_SCROLL: i16 = 10;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Any key acknowledges the current notice
        if state.status_bar.notice.is_some() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::Dismiss));
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys
        // ═══════════════════════════════════════════════════════════════════

        if ctrl && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if ctrl && key.code == KeyCode::Char('p') {
            dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Toggle));
            return;
        }

        if state.profile_menu.open {
            let action = match key.code {
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => ProfileMenuAction::Previous,
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => ProfileMenuAction::Next,
                KeyCode::Enter => ProfileMenuAction::Activate,
                _ => ProfileMenuAction::Close,
            };
            dispatcher.dispatch(Action::ProfileMenu(action));
            return;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else if state.view_stack.len() > 1 {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            } else if state.active_route() != Route::Home {
                dispatcher.dispatch(Action::go_to(Route::Home));
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            let input = match key.code {
                KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    Some(TextInputAction::Char(c))
                }
                KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                    Some(TextInputAction::ClearLine)
                }
                KeyCode::Backspace => Some(TextInputAction::Backspace),
                KeyCode::Enter => Some(TextInputAction::Confirm),
                _ => None,
            };
            if let Some(input) = input {
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }

            let nav = match key.code {
                KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    Some(NavigationAction::Previous)
                }
                KeyCode::Tab => Some(NavigationAction::Next),
                KeyCode::BackTab => Some(NavigationAction::Previous),
                KeyCode::Down if capabilities.supports_item_navigation() => {
                    Some(NavigationAction::Next)
                }
                KeyCode::Up if capabilities.supports_item_navigation() => {
                    Some(NavigationAction::Previous)
                }
                _ => None,
            };
            if let Some(nav) = nav {
                dispatcher.dispatch(Action::Navigate(nav));
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: View bindings, then global bindings
        // ═══════════════════════════════════════════════════════════════════

        if let Some(view) = view {
            let actions = view.translate_key(key, state);
            if !actions.is_empty() {
                log::debug!("Layer 3: {:?} handled {:?}", view.view_id(), key.code);
                for action in actions {
                    dispatcher.dispatch(action);
                }
                return;
            }
        }

        if let Some(action) = global_binding(key, state) {
            dispatcher.dispatch(action);
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-key bindings available on every page without text input
fn global_binding(key: KeyEvent, state: &AppState) -> Option<Action> {
    let logged_in = state.session.is_logged_in();
    let capabilities = state
        .active_view()
        .map(|v| v.capabilities(state))
        .unwrap_or_default();
    let navigable = capabilities.supports_item_navigation();
    let scrollable = capabilities.supports_vertical_scroll();

    match key.code {
        KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
        KeyCode::Char('p') if logged_in => Some(Action::ProfileMenu(ProfileMenuAction::Toggle)),
        KeyCode::Char('r') => Some(Action::Global(GlobalAction::Refresh)),
        KeyCode::Char('h') => Some(Action::go_to(Route::Home)),
        KeyCode::Char('o') if logged_in => Some(Action::go_to(Route::Orders)),
        KeyCode::Char('s') if !logged_in => Some(Action::go_to(Route::SignIn)),
        KeyCode::Char('d') if !logged_in && state.app_config.demo_login.enabled => {
            Some(Action::ProfileMenu(ProfileMenuAction::DemoLogin))
        }
        // Item navigation takes the arrow keys, paging still scrolls
        KeyCode::Down | KeyCode::Char('j') if navigable => Some(Action::Navigate(NavigationAction::Next)),
        KeyCode::Up | KeyCode::Char('k') if navigable => {
            Some(Action::Navigate(NavigationAction::Previous))
        }
        KeyCode::Down | KeyCode::Char('j') if scrollable => {
            Some(Action::Global(GlobalAction::ScrollBy(1)))
        }
        KeyCode::Up | KeyCode::Char('k') if scrollable => {
            Some(Action::Global(GlobalAction::ScrollBy(-1)))
        }
        KeyCode::PageDown if scrollable => Some(Action::Global(GlobalAction::ScrollBy(PAGE_SCROLL))),
        KeyCode::PageUp if scrollable => Some(Action::Global(GlobalAction::ScrollBy(-PAGE_SCROLL))),
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                self.handle_key(*key, state, dispatcher);
                false
            }
            Action::Navigate(nav) => {
                if let Some(translated) = state
                    .active_view()
                    .and_then(|v| v.translate_navigation(*nav, state))
                {
                    dispatcher.dispatch(translated);
                }
                false
            }
            Action::TextInput(input) => {
                if let Some(translated) = state
                    .active_view()
                    .and_then(|v| v.translate_text_input(*input, state))
                {
                    dispatcher.dispatch(translated);
                }
                false
            }
            _ => true,
        }
    }
}
