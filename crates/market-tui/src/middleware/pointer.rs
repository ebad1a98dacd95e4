//! PointerMiddleware - mouse clicks
//!
//! Every click is first published on the shared pointer source (where the
//! profile dropdown listens for outside clicks), then hit-tested against the
//! header controls: the profile button and dropdown with a session, the
//! guest controls without one.

use crate::actions::{Action, GlobalAction, ProfileMenuAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::pointer::{Click, PointerEvents};
use crate::route::Route;
use crate::state::{AppState, GuestControl};
use crate::view_models::profile_menu::ProfileMenuViewModel;
use crate::views::header;

pub struct PointerMiddleware {
    pointer: PointerEvents,
}

impl PointerMiddleware {
    pub fn new(pointer: PointerEvents) -> Self {
        Self { pointer }
    }

    fn handle_click(&self, click: Click, state: &AppState, dispatcher: &Dispatcher) {
        self.pointer.emit(click);

        let Some((button, dropdown)) = header::profile_hit_areas(state) else {
            self.handle_guest_click(click, state, dispatcher);
            return;
        };
        if click.is_inside(button) {
            dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Toggle));
            return;
        }

        if state.profile_menu.open && click.is_inside(dropdown) {
            // Skip the top border of the dropdown
            let Some(row) = click.row.checked_sub(dropdown.y + 1) else {
                return;
            };
            let vm = ProfileMenuViewModel::from_state(state);
            if let Some(index) = vm.entry_at_row(row) {
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Select(index)));
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Activate));
            }
        }
    }

    fn handle_guest_click(&self, click: Click, state: &AppState, dispatcher: &Dispatcher) {
        let hit = header::guest_hit_areas(state)
            .into_iter()
            .find(|(_, area)| click.is_inside(*area));
        match hit {
            Some((GuestControl::DemoUser, _)) => {
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::DemoLogin));
            }
            Some((GuestControl::SignIn, _)) => dispatcher.dispatch(Action::go_to(Route::SignIn)),
            None => {}
        }
    }
}

impl Middleware for PointerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Click { column, row }) => {
                self.handle_click(Click::new(*column, *row), state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SessionAction;
    use crate::middleware::tests::recording_dispatcher;
    use crate::reducers::app_reducer::reduce;
    use market_client::User;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn signed_out() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Resize {
                width: 80,
                height: 24,
            }),
        )
    }

    fn state() -> AppState {
        reduce(
            signed_out(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: "demo@aa.io".to_string(),
            })),
        )
    }

    fn click(column: u16, row: u16) -> Action {
        Action::Global(GlobalAction::Click { column, row })
    }

    #[test]
    fn test_click_on_profile_button_toggles_menu() {
        let state = state();
        let (button, _) = header::profile_hit_areas(&state).expect("signed in");
        let (dispatcher, rx) = recording_dispatcher();

        let mut middleware = PointerMiddleware::new(PointerEvents::new());
        assert!(!middleware.handle(&click(button.x, button.y), &state, &dispatcher));

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.as_slice(),
            [Action::ProfileMenu(ProfileMenuAction::Toggle)]
        ));
    }

    #[test]
    fn test_click_on_entry_selects_and_activates() {
        let state = reduce(state(), &Action::ProfileMenu(ProfileMenuAction::Open));
        let (_, dropdown) = header::profile_hit_areas(&state).expect("signed in");
        let (dispatcher, rx) = recording_dispatcher();

        // border, username header, then "Your listings", "Your orders"
        let mut middleware = PointerMiddleware::new(PointerEvents::new());
        middleware.handle(&click(dropdown.x + 2, dropdown.y + 3), &state, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.as_slice(),
            [
                Action::ProfileMenu(ProfileMenuAction::Select(1)),
                Action::ProfileMenu(ProfileMenuAction::Activate)
            ]
        ));
    }

    #[test]
    fn test_guest_controls_without_session() {
        let state = signed_out();
        let areas = header::guest_hit_areas(&state);
        assert_eq!(areas.len(), 2);
        let (dispatcher, rx) = recording_dispatcher();

        let mut middleware = PointerMiddleware::new(PointerEvents::new());
        for (_, area) in &areas {
            middleware.handle(&click(area.x + 1, area.y), &state, &dispatcher);
        }

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.as_slice(),
            [
                Action::ProfileMenu(ProfileMenuAction::DemoLogin),
                Action::Global(GlobalAction::GoTo(Route::SignIn))
            ]
        ));
    }

    #[test]
    fn test_click_between_guest_controls_does_nothing() {
        let state = signed_out();
        let areas = header::guest_hit_areas(&state);
        let gap = areas[0].1.right();
        let (dispatcher, rx) = recording_dispatcher();

        let mut middleware = PointerMiddleware::new(PointerEvents::new());
        middleware.handle(&click(gap, areas[0].1.y), &state, &dispatcher);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_clicks_reach_pointer_listeners() {
        let pointer = PointerEvents::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let _subscription = pointer.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let (dispatcher, rx) = recording_dispatcher();

        let mut middleware = PointerMiddleware::new(pointer);
        middleware.handle(&click(1, 12), &state(), &dispatcher);

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(rx.try_iter().count(), 0);
    }
}
