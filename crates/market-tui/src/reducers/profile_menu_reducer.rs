//! Profile Menu Reducer
//!
//! `entry_count` is the number of dropdown entries for the current session.
//! A dropdown with no entries never opens.

use crate::actions::ProfileMenuAction;
use crate::state::ProfileMenuState;

pub fn reduce_profile_menu(
    mut state: ProfileMenuState,
    action: &ProfileMenuAction,
    entry_count: usize,
) -> ProfileMenuState {
    match action {
        ProfileMenuAction::Toggle => {
            state.open = !state.open && entry_count > 0;
            state.selected = 0;
        }
        ProfileMenuAction::Open if entry_count > 0 => {
            state.open = true;
            state.selected = 0;
        }
        ProfileMenuAction::Close => {
            state.open = false;
        }
        ProfileMenuAction::Next if state.open && entry_count > 0 => {
            state.selected = (state.selected + 1) % entry_count;
        }
        ProfileMenuAction::Previous if state.open && entry_count > 0 => {
            state.selected = (state.selected + entry_count - 1) % entry_count;
        }
        ProfileMenuAction::Select(index) if *index < entry_count => {
            state.selected = *index;
        }
        // Activation is handled by the profile menu middleware
        _ => {}
    }
    state
}
