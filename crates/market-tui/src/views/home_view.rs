//! Home page: open an item by id

use crate::actions::{Action, HomeAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn view_id(&self) -> ViewId {
        ViewId::Home
    }

    fn route(&self) -> Option<Route> {
        Some(Route::Home)
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let greeting = match state.session.username() {
            Some(username) => format!("Welcome back, {}!", username),
            None => "Welcome to the marketplace!".to_string(),
        };

        let mut lines = vec![
            Line::from(Span::styled(greeting, theme.section_header())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Item # ", theme.text_secondary()),
                Span::styled(state.home.item_id_input.clone(), theme.text()),
                Span::styled("█", theme.accent()),
            ]),
        ];
        if let Some(error) = &state.home.error {
            lines.push(Line::from(Span::styled(error.clone(), theme.error())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Type an item number and press Enter to open it.",
            theme.muted(),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(" Home ", theme.panel_title()));
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    /// Digits edit the prompt, letters stay free for the global bindings
    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => vec![Action::Home(HomeAction::Char(c))],
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Action::Home(HomeAction::ClearInput)]
            }
            KeyCode::Backspace => vec![Action::Home(HomeAction::Backspace)],
            KeyCode::Enter => match state.home.item_id_input.parse() {
                Ok(item_id) => vec![Action::go_to(Route::Item(item_id))],
                Err(_) => vec![Action::Home(HomeAction::Invalid(
                    "Enter an item number".to_string(),
                ))],
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use crate::reducers::app_reducer::reduce;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_item() {
        let mut state = AppState::default();
        for c in ['4', '2'] {
            for action in HomeView.translate_key(press(KeyCode::Char(c)), &state) {
                state = reduce(state, &action);
            }
        }
        let actions = HomeView.translate_key(press(KeyCode::Enter), &state);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::GoTo(Route::Item(42)))]
        ));
    }

    #[test]
    fn test_enter_without_id_reports_error() {
        let actions = HomeView.translate_key(press(KeyCode::Enter), &AppState::default());
        assert!(matches!(
            actions.as_slice(),
            [Action::Home(HomeAction::Invalid(_))]
        ));
    }

    #[test]
    fn test_letters_are_left_to_global_bindings() {
        assert!(HomeView
            .translate_key(press(KeyCode::Char('q')), &AppState::default())
            .is_empty());
    }
}
