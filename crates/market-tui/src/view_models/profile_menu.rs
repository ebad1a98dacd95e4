//! View model for the profile control and its dropdown

use crate::state::{AppState, GuestControl, ProfileMenuEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMenuViewModel {
    /// Text of the profile button in the header (only with a session)
    pub button_label: Option<String>,
    /// Controls shown in the header instead of the button when signed out
    pub guest_controls: Vec<GuestControl>,
    /// Username shown above the entries (only with a session)
    pub header: Option<String>,
    pub entries: Vec<ProfileMenuEntry>,
    pub selected: usize,
    pub open: bool,
}

impl ProfileMenuViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let user = state.session.user.as_ref();
        let entries = ProfileMenuEntry::entries(user);
        Self {
            button_label: user.map(|user| format!("{} ▾", user.username)),
            guest_controls: GuestControl::controls(user, state.app_config.demo_login.enabled),
            header: user.map(|u| u.username.clone()),
            selected: state.profile_menu.selected.min(entries.len().saturating_sub(1)),
            entries,
            open: state.profile_menu.open && user.is_some(),
        }
    }

    /// Rows inside the dropdown border (header line plus entries)
    pub fn row_count(&self) -> u16 {
        (self.entries.len() + usize::from(self.header.is_some())) as u16
    }

    /// Entry shown at `row` (0 = first row inside the border)
    pub fn entry_at_row(&self, row: u16) -> Option<usize> {
        let offset = u16::from(self.header.is_some());
        let index = usize::from(row.checked_sub(offset)?);
        (index < self.entries.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, SessionAction};
    use crate::reducers::app_reducer::reduce;
    use market_client::User;

    #[test]
    fn test_logged_in_menu_has_header_and_five_entries() {
        let state = reduce(
            AppState::default(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: String::new(),
            })),
        );
        let vm = ProfileMenuViewModel::from_state(&state);
        assert_eq!(vm.button_label.as_deref(), Some("demo ▾"));
        assert!(vm.guest_controls.is_empty());
        assert_eq!(vm.header.as_deref(), Some("demo"));
        assert_eq!(vm.entries.len(), 5);
        assert_eq!(vm.row_count(), 6);
        assert_eq!(vm.entry_at_row(0), None);
        assert_eq!(vm.entry_at_row(1), Some(0));
        assert_eq!(vm.entry_at_row(5), Some(4));
        assert_eq!(vm.entry_at_row(6), None);
    }

    #[test]
    fn test_logged_out_shows_guest_controls_without_dropdown() {
        let vm = ProfileMenuViewModel::from_state(&AppState::default());
        assert_eq!(vm.button_label, None);
        assert_eq!(
            vm.guest_controls,
            vec![GuestControl::DemoUser, GuestControl::SignIn]
        );
        assert!(vm.entries.is_empty());
        assert_eq!(vm.entry_at_row(0), None);
    }
}
