//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::StatusBarState;

/// Reduce status bar state
pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Show(notice) => {
            state.notice = Some(notice.clone());
        }
        StatusBarAction::Dismiss => {
            state.notice = None;
        }
    }
    state
}
