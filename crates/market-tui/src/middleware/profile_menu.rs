//! ProfileMenuMiddleware - dropdown behavior of the profile control
//!
//! Opening the dropdown subscribes an outside-click listener on the shared
//! pointer source. The subscription guard is held here and dropped when the
//! dropdown closes or the page changes, so open/close cycles never pile up
//! listeners. The listener itself fires at most once.
//!
//! The listener reads the control geometry from a shared cell that is
//! refreshed on every terminal resize while the dropdown is open. Without a
//! session there is no dropdown and toggling does nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use market_client::Credentials;
use ratatui::layout::Rect;

use crate::actions::{Action, GlobalAction, LoginOrigin, ProfileMenuAction, Thunk};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::pointer::{Click, ClickSubscription, PointerEvents};
use crate::state::{AppState, ProfileMenuEntry};
use crate::views::header;

/// Profile button and dropdown areas
type HitAreas = (Rect, Rect);

fn lock_areas(areas: &Mutex<HitAreas>) -> MutexGuard<'_, HitAreas> {
    match areas.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct ProfileMenuMiddleware {
    pointer: PointerEvents,
    outside_click: Option<ClickSubscription>,
    hit_areas: Arc<Mutex<HitAreas>>,
}

impl ProfileMenuMiddleware {
    pub fn new(pointer: PointerEvents) -> Self {
        Self {
            pointer,
            outside_click: None,
            hit_areas: Arc::new(Mutex::new((Rect::default(), Rect::default()))),
        }
    }

    fn subscribe(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        if self.outside_click.is_some() {
            return;
        }
        let Some(areas) = header::profile_hit_areas(state) else {
            return;
        };
        *lock_areas(&self.hit_areas) = areas;

        let hit_areas = Arc::clone(&self.hit_areas);
        let dispatcher = dispatcher.clone();
        let fired = AtomicBool::new(false);

        self.outside_click = Some(self.pointer.subscribe(move |click: Click| {
            let (button, dropdown) = *lock_areas(&hit_areas);
            if click.is_inside(button) || click.is_inside(dropdown) {
                return;
            }
            if !fired.swap(true, Ordering::SeqCst) {
                log::debug!("Profile menu: outside click at {:?}", click);
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Close));
            }
        }));
    }

    fn unsubscribe(&mut self) {
        self.outside_click = None;
    }

    /// Move the listener's hit areas to the new terminal size
    fn follow_resize(&self, state: &AppState, width: u16, height: u16) {
        if self.outside_click.is_none() {
            return;
        }
        let viewport = Rect {
            width,
            height,
            ..state.viewport
        };
        if let Some(areas) = header::profile_hit_areas_in(state, viewport) {
            *lock_areas(&self.hit_areas) = areas;
        }
    }

    fn activate(&self, state: &AppState, dispatcher: &Dispatcher) {
        let entries = ProfileMenuEntry::entries(state.session.user.as_ref());
        let Some(entry) = entries.get(state.profile_menu.selected) else {
            return;
        };
        log::debug!("Profile menu: activating {:?}", entry);

        match entry {
            ProfileMenuEntry::Link(route) => dispatcher.dispatch(Action::go_to(*route)),
            ProfileMenuEntry::LogOut => {
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Close));
                dispatcher.dispatch(Action::thunk(Thunk::Logout));
            }
        }
    }
}

impl Middleware for ProfileMenuMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::ProfileMenu(ProfileMenuAction::Toggle) if !state.session.is_logged_in() => {
                log::debug!("Profile menu: no session, nothing to toggle");
                false
            }
            Action::ProfileMenu(ProfileMenuAction::Toggle) => {
                let next = if state.profile_menu.open {
                    ProfileMenuAction::Close
                } else {
                    ProfileMenuAction::Open
                };
                dispatcher.dispatch(Action::ProfileMenu(next));
                false
            }
            Action::ProfileMenu(ProfileMenuAction::Open) => {
                self.subscribe(state, dispatcher);
                true
            }
            Action::ProfileMenu(ProfileMenuAction::Close) => {
                self.unsubscribe();
                true
            }
            Action::ProfileMenu(ProfileMenuAction::Activate) => {
                self.activate(state, dispatcher);
                false
            }
            Action::ProfileMenu(ProfileMenuAction::DemoLogin) => {
                let demo = &state.app_config.demo_login;
                if demo.enabled {
                    dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Close));
                    dispatcher.dispatch(Action::thunk(Thunk::Login {
                        credentials: Credentials::new(demo.email.clone(), demo.password.clone()),
                        origin: LoginOrigin::DemoButton,
                    }));
                }
                false
            }
            Action::Global(GlobalAction::Resize { width, height }) => {
                self.follow_resize(state, *width, *height);
                true
            }
            // Leaving the page tears the dropdown down
            Action::Global(GlobalAction::GoTo(_)) => {
                self.unsubscribe();
                true
            }
            // Entries change with the session; close so the geometry stays right
            Action::Session(_) if state.profile_menu.open => {
                dispatcher.dispatch(Action::ProfileMenu(ProfileMenuAction::Close));
                true
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
    use crate::route::Route;
    use market_client::User;

    fn viewport_state() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Resize {
                width: 80,
                height: 24,
            }),
        )
    }

    fn logged_in() -> AppState {
        reduce(
            viewport_state(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: "demo@aa.io".to_string(),
            })),
        )
    }

    #[test]
    fn test_outside_click_closes_exactly_once() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, rx) = recording_dispatcher();
        let state = logged_in();

        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
        assert_eq!(pointer.listener_count(), 1);

        pointer.emit(Click::new(2, 15));
        pointer.emit(Click::new(3, 16));
        let closes: Vec<Action> = rx.try_iter().collect();
        assert_eq!(closes.len(), 1);
        assert!(matches!(closes[0], Action::ProfileMenu(ProfileMenuAction::Close)));

        // the Close re-enters the chain and drops the listener
        middleware.handle(&closes[0], &state, &dispatcher);
        assert_eq!(pointer.listener_count(), 0);
    }

    #[test]
    fn test_click_inside_dropdown_keeps_it_open() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, rx) = recording_dispatcher();
        let state = logged_in();

        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
        let (button, dropdown) = header::profile_hit_areas(&state).expect("signed in");
        pointer.emit(Click::new(dropdown.x + 1, dropdown.y + 1));
        pointer.emit(Click::new(button.x, button.y));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_outside_click_follows_resize() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, rx) = recording_dispatcher();
        let state = reduce(logged_in(), &Action::ProfileMenu(ProfileMenuAction::Open));

        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
        let resize = Action::Global(GlobalAction::Resize {
            width: 120,
            height: 30,
        });
        assert!(middleware.handle(&resize, &state, &dispatcher));
        let resized = reduce(state, &resize);

        let (button, dropdown) = header::profile_hit_areas(&resized).expect("signed in");
        pointer.emit(Click::new(dropdown.x + 2, dropdown.y + 2));
        pointer.emit(Click::new(button.x, button.y));
        assert_eq!(rx.try_iter().count(), 0);

        // the old dropdown position is now outside
        pointer.emit(Click::new(62, 5));
        assert!(matches!(
            rx.try_iter().collect::<Vec<_>>().as_slice(),
            [Action::ProfileMenu(ProfileMenuAction::Close)]
        ));
    }

    #[test]
    fn test_open_close_cycles_do_not_accumulate_listeners() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, _rx) = recording_dispatcher();
        let state = logged_in();

        for _ in 0..10 {
            middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
            middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
            assert_eq!(pointer.listener_count(), 1);
            middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Close), &state, &dispatcher);
            assert_eq!(pointer.listener_count(), 0);
        }
    }

    #[test]
    fn test_navigation_drops_listener() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, _rx) = recording_dispatcher();
        let state = logged_in();

        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
        middleware.handle(&Action::go_to(Route::Orders), &state, &dispatcher);
        assert_eq!(pointer.listener_count(), 0);
    }

    #[test]
    fn test_toggle_resolves_against_state() {
        let mut middleware = ProfileMenuMiddleware::new(PointerEvents::new());
        let (dispatcher, rx) = recording_dispatcher();

        let closed = logged_in();
        assert!(!middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Toggle), &closed, &dispatcher));
        let open = reduce(closed, &Action::ProfileMenu(ProfileMenuAction::Open));
        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Toggle), &open, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.as_slice(),
            [
                Action::ProfileMenu(ProfileMenuAction::Open),
                Action::ProfileMenu(ProfileMenuAction::Close)
            ]
        ));
    }

    #[test]
    fn test_toggle_without_session_is_ignored() {
        let pointer = PointerEvents::new();
        let mut middleware = ProfileMenuMiddleware::new(pointer.clone());
        let (dispatcher, rx) = recording_dispatcher();
        let state = viewport_state();

        assert!(!middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Toggle), &state, &dispatcher));
        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Open), &state, &dispatcher);
        assert_eq!(rx.try_iter().count(), 0);
        assert_eq!(pointer.listener_count(), 0);
    }

    #[test]
    fn test_activate_link_and_log_out() {
        let mut middleware = ProfileMenuMiddleware::new(PointerEvents::new());
        let (dispatcher, rx) = recording_dispatcher();

        let state = reduce(logged_in(), &Action::ProfileMenu(ProfileMenuAction::Open));
        let state = reduce(state, &Action::ProfileMenu(ProfileMenuAction::Select(1)));
        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Activate), &state, &dispatcher);

        let state = reduce(state, &Action::ProfileMenu(ProfileMenuAction::Select(4)));
        middleware.handle(&Action::ProfileMenu(ProfileMenuAction::Activate), &state, &dispatcher);

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.as_slice(),
            [
                Action::Global(GlobalAction::GoTo(Route::Orders)),
                Action::ProfileMenu(ProfileMenuAction::Close),
                Action::Thunk(Thunk::Logout)
            ]
        ));
    }

    #[test]
    fn test_demo_login_uses_configured_credentials() {
        let mut middleware = ProfileMenuMiddleware::new(PointerEvents::new());
        let (dispatcher, rx) = recording_dispatcher();

        middleware.handle(
            &Action::ProfileMenu(ProfileMenuAction::DemoLogin),
            &AppState::default(),
            &dispatcher,
        );

        let actions: Vec<Action> = rx.try_iter().collect();
        match actions.as_slice() {
            [Action::ProfileMenu(ProfileMenuAction::Close), Action::Thunk(Thunk::Login {
                credentials,
                origin: LoginOrigin::DemoButton,
            })] => assert_eq!(credentials, &Credentials::new("demo@aa.io", "password")),
            other => panic!("unexpected actions {other:?}"),
        }
    }
}
