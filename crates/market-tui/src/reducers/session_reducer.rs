//! Session Reducer

use std::sync::Arc;

use crate::actions::SessionAction;
use crate::state::SessionState;

/// Reduce session actions
pub fn reduce_session(state: Arc<SessionState>, action: &SessionAction) -> Arc<SessionState> {
    match action {
        SessionAction::Set(user) => {
            log::info!("Session: logged in as {}", user.username);
            Arc::new(SessionState {
                user: Some(user.clone()),
            })
        }
        SessionAction::Clear => {
            if state.user.is_none() {
                return state;
            }
            log::info!("Session: logged out");
            Arc::new(SessionState { user: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_client::User;

    fn demo() -> User {
        User {
            id: 1,
            username: "demo".to_string(),
            email: "demo@aa.io".to_string(),
        }
    }

    #[test]
    fn test_set_and_clear() {
        let state = reduce_session(Arc::default(), &SessionAction::Set(demo()));
        assert_eq!(state.username(), Some("demo"));

        let state = reduce_session(state, &SessionAction::Clear);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_clear_without_user_keeps_pointer() {
        let state: Arc<SessionState> = Arc::default();
        let next = reduce_session(Arc::clone(&state), &SessionAction::Clear);
        assert!(Arc::ptr_eq(&state, &next));
    }
}
