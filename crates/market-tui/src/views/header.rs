//! Header bar with the profile control
//!
//! The header shows the app name, the current path and either the profile
//! button (signed in) or the guest controls (signed out). Control and
//! dropdown geometry is computed here for rendering and for mouse hit
//! testing, so both always agree.

use crate::state::{AppState, GuestControl};
use crate::view_models::ProfileMenuViewModel;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 3;
const DROPDOWN_MIN_WIDTH: u16 = 20;

/// Screen cell of the profile button
pub fn profile_button_area(header_area: Rect, label: &str) -> Rect {
    let width = (Span::raw(label).width() as u16 + 2).min(header_area.width);
    Rect {
        x: header_area.right().saturating_sub(width + 1).max(header_area.x),
        y: header_area.y + 1,
        width,
        height: 1.min(header_area.height),
    }
}

/// Screen cells of the guest controls, packed against the right edge with a
/// one column gap between them
pub fn guest_control_areas(header_area: Rect, controls: &[GuestControl]) -> Vec<(GuestControl, Rect)> {
    let mut right = header_area.right().saturating_sub(1);
    let mut areas: Vec<(GuestControl, Rect)> = controls
        .iter()
        .rev()
        .map(|control| {
            let width = Span::raw(control.label()).width() as u16 + 2;
            let x = right.saturating_sub(width).max(header_area.x);
            let area = Rect {
                x,
                y: header_area.y + 1,
                width: right.saturating_sub(x),
                height: 1.min(header_area.height),
            };
            right = x.saturating_sub(1);
            (*control, area)
        })
        .collect();
    areas.reverse();
    areas
}

/// Area of the open dropdown, right-aligned below the header
pub fn dropdown_area(screen: Rect, vm: &ProfileMenuViewModel) -> Rect {
    let widest = vm
        .entries
        .iter()
        .map(|e| e.label().to_string())
        .chain(vm.header.clone())
        .map(|label| Span::raw(label).width() as u16)
        .max()
        .unwrap_or(0);
    let width = (widest + 4).max(DROPDOWN_MIN_WIDTH).min(screen.width);
    let height = vm.row_count() + 2;
    Rect {
        x: screen.right().saturating_sub(width + 1).max(screen.x),
        y: screen.y + HEADER_HEIGHT,
        width,
        height,
    }
    .intersection(screen)
}

/// Profile button and dropdown areas for the last known terminal size, or
/// `None` without a session
pub fn profile_hit_areas(state: &AppState) -> Option<(Rect, Rect)> {
    profile_hit_areas_in(state, state.viewport)
}

/// Same as [`profile_hit_areas`] for an explicit terminal size
pub fn profile_hit_areas_in(state: &AppState, viewport: Rect) -> Option<(Rect, Rect)> {
    let [header_area, _, _] = super::screen_layout(viewport);
    let vm = ProfileMenuViewModel::from_state(state);
    let label = vm.button_label.as_deref()?;
    Some((
        profile_button_area(header_area, label),
        dropdown_area(viewport, &vm),
    ))
}

/// Guest control areas for the last known terminal size
pub fn guest_hit_areas(state: &AppState) -> Vec<(GuestControl, Rect)> {
    let [header_area, _, _] = super::screen_layout(state.viewport);
    let vm = ProfileMenuViewModel::from_state(state);
    guest_control_areas(header_area, &vm.guest_controls)
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = ProfileMenuViewModel::from_state(state);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.panel_border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" Marketplace ", theme.panel_title()),
        Span::styled(state.active_route().to_string(), theme.muted()),
    ]);
    f.render_widget(Paragraph::new(title), Rect { height: 1, ..inner });

    match &vm.button_label {
        Some(label) => {
            let button_style = if vm.open {
                theme.selection()
            } else {
                theme.accent()
            };
            f.render_widget(
                Paragraph::new(Span::styled(format!(" {} ", label), button_style)),
                profile_button_area(area, label),
            );
        }
        None => {
            for (control, control_area) in guest_control_areas(area, &vm.guest_controls) {
                f.render_widget(
                    Paragraph::new(Span::styled(format!(" {} ", control.label()), theme.accent())),
                    control_area,
                );
            }
        }
    }
}

/// Render the dropdown when it is open
pub fn render_dropdown(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = ProfileMenuViewModel::from_state(state);
    if !vm.open {
        return;
    }
    let theme = &state.theme;
    let dropdown = dropdown_area(area, &vm);

    let mut lines = Vec::new();
    if let Some(username) = &vm.header {
        lines.push(Line::from(Span::styled(username.clone(), theme.section_header())));
    }
    for (index, entry) in vm.entries.iter().enumerate() {
        let style = if index == vm.selected {
            theme.selection()
        } else {
            theme.text()
        };
        lines.push(Line::from(Span::styled(format!(" {} ", entry.label()), style)));
    }

    f.render_widget(Clear, dropdown);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .style(theme.panel_background()),
        ),
        dropdown,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, GlobalAction, ProfileMenuAction, SessionAction};
    use crate::reducers::app_reducer::reduce;
    use crate::views::tests::{render_to_lines, screen_contains};
    use market_client::User;

    fn logged_in() -> AppState {
        reduce(
            AppState::default(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: String::new(),
            })),
        )
    }

    #[test]
    fn test_button_is_right_aligned() {
        let area = profile_button_area(Rect::new(0, 0, 80, 3), "demo ▾");
        assert_eq!(area, Rect::new(71, 1, 8, 1));
    }

    #[test]
    fn test_open_dropdown_with_user() {
        let state = reduce(logged_in(), &Action::ProfileMenu(ProfileMenuAction::Open));
        let lines = render_to_lines(&state, 80, 20);
        for label in [
            "demo",
            "Your listings",
            "Your orders",
            "Your reviews",
            "List a product",
            "Log out",
        ] {
            assert!(screen_contains(&lines, label), "missing {label}");
        }
        assert!(!screen_contains(&lines, "Demo user"));
    }

    #[test]
    fn test_guest_controls_render_in_header_without_user() {
        let lines = render_to_lines(&AppState::default(), 80, 20);
        assert!(lines[1].contains("Demo user"), "header row: {:?}", lines[1]);
        assert!(lines[1].contains("Sign in"), "header row: {:?}", lines[1]);
        assert!(!screen_contains(&lines, "Profile"));
        assert!(!screen_contains(&lines, "Log out"));
    }

    #[test]
    fn test_guest_controls_pack_right() {
        let areas = guest_control_areas(
            Rect::new(0, 0, 80, 3),
            &[GuestControl::DemoUser, GuestControl::SignIn],
        );
        assert_eq!(
            areas,
            vec![
                (GuestControl::DemoUser, Rect::new(58, 1, 11, 1)),
                (GuestControl::SignIn, Rect::new(70, 1, 9, 1)),
            ]
        );
    }

    #[test]
    fn test_no_profile_hit_areas_without_user() {
        assert_eq!(profile_hit_areas(&AppState::default()), None);
        assert_eq!(guest_hit_areas(&logged_in()), Vec::new());
    }

    #[test]
    fn test_hit_areas_follow_viewport() {
        let state = reduce(
            logged_in(),
            &Action::Global(GlobalAction::Resize {
                width: 100,
                height: 30,
            }),
        );
        let (button, dropdown) = profile_hit_areas(&state).expect("signed in");
        assert_eq!(button.y, 1);
        assert_eq!(button.right(), 99);
        assert_eq!(dropdown.y, HEADER_HEIGHT);
        assert_eq!(dropdown.height, 8);
        assert!(dropdown.right() <= 100);
    }
}
