//! Profile control state
//!
//! The dropdown's open flag and highlight are view-local; the entries are
//! derived from the session on every render. Without a session there is no
//! dropdown: the header shows the guest controls directly.

use crate::route::Route;
use market_client::User;

/// One row of the profile dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuEntry {
    /// Navigation link to a route
    Link(Route),
    LogOut,
}

impl ProfileMenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Link(Route::Listings) => "Your listings",
            Self::Link(Route::Orders) => "Your orders",
            Self::Link(Route::Reviews) => "Your reviews",
            Self::Link(Route::ListProduct) => "List a product",
            Self::Link(route) => route.title(),
            Self::LogOut => "Log out",
        }
    }

    /// Dropdown entries: four links and the log out control, or nothing
    /// without a user
    pub fn entries(user: Option<&User>) -> Vec<ProfileMenuEntry> {
        match user {
            Some(_) => vec![
                Self::Link(Route::Listings),
                Self::Link(Route::Orders),
                Self::Link(Route::Reviews),
                Self::Link(Route::ListProduct),
                Self::LogOut,
            ],
            None => Vec::new(),
        }
    }
}

/// Header control shown in place of the profile button when signed out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestControl {
    DemoUser,
    SignIn,
}

impl GuestControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DemoUser => "Demo user",
            Self::SignIn => "Sign in",
        }
    }

    /// Controls in header order, left to right
    pub fn controls(user: Option<&User>, demo_enabled: bool) -> Vec<GuestControl> {
        match user {
            Some(_) => Vec::new(),
            None if demo_enabled => vec![Self::DemoUser, Self::SignIn],
            None => vec![Self::SignIn],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileMenuState {
    pub open: bool,
    pub selected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> User {
        User {
            id: 1,
            username: "demo".to_string(),
            email: "demo@aa.io".to_string(),
        }
    }

    #[test]
    fn test_entries_with_user() {
        let entries = ProfileMenuEntry::entries(Some(&demo()));
        let labels: Vec<_> = entries.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Your listings",
                "Your orders",
                "Your reviews",
                "List a product",
                "Log out"
            ]
        );
    }

    #[test]
    fn test_no_dropdown_entries_without_user() {
        assert!(ProfileMenuEntry::entries(None).is_empty());
    }

    #[test]
    fn test_guest_controls() {
        assert_eq!(
            GuestControl::controls(None, true),
            vec![GuestControl::DemoUser, GuestControl::SignIn]
        );
        assert_eq!(GuestControl::controls(None, false), vec![GuestControl::SignIn]);
        assert!(GuestControl::controls(Some(&demo()), true).is_empty());
    }
}
