//! Sign-in page (`/sign-in`)

use crate::actions::{Action, NavigationAction, SignInAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::{AppState, SignInField};
use crate::views::{View, ViewId};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SignInView;

impl SignInView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SignInView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SignInView {
    fn view_id(&self) -> ViewId {
        ViewId::SignIn
    }

    fn route(&self) -> Option<Route> {
        Some(Route::SignIn)
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let form = &state.sign_in;

        let mut lines: Vec<Line> = form
            .errors
            .iter()
            .map(|error| Line::from(Span::styled(format!("• {}", error), theme.error())))
            .collect();
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }

        for field in [SignInField::Email, SignInField::Password] {
            let focused = field == form.focused_field;
            let value = match field {
                SignInField::Email => form.email.clone(),
                SignInField::Password => form.masked_password(),
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", if focused { "▸ " } else { "  " }, field.label()),
                if focused {
                    theme.accent()
                } else {
                    theme.text_secondary()
                },
            )));
            let mut spans = vec![Span::styled(format!("  {}", value), theme.text())];
            if focused && !form.is_submitting() {
                spans.push(Span::styled("█", theme.accent()));
            }
            lines.push(Line::from(spans));
        }

        if form.is_submitting() {
            lines.push(Line::from(Span::styled("Signing in…", theme.info())));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(" Sign in ", theme.panel_title()));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::TEXT_INPUT | ViewCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => SignInAction::NextField,
            NavigationAction::Previous => SignInAction::PrevField,
        };
        Some(Action::SignIn(action))
    }

    fn translate_text_input(&self, input: TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SignInAction::Char(c),
            TextInputAction::Backspace => SignInAction::Backspace,
            TextInputAction::ClearLine => SignInAction::ClearField,
            TextInputAction::Escape => SignInAction::Cancel,
            TextInputAction::Confirm => SignInAction::Submit,
        };
        Some(Action::SignIn(action))
    }
}
