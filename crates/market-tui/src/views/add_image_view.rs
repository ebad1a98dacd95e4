//! Add Image View
//!
//! Floating popup over an item page where the seller pastes the URL of
//! another image.

use crate::actions::{Action, AddImageAction, NavigationAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use market_client::ItemId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct AddImageView {
    item_id: ItemId,
}

impl AddImageView {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }
}

impl View for AddImageView {
    fn view_id(&self) -> ViewId {
        ViewId::AddImage
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let Some(form) = state.add_image.as_ref().filter(|form| form.item_id == self.item_id) else {
            return;
        };

        f.render_widget(
            Block::default().style(Style::default().add_modifier(Modifier::DIM)),
            area,
        );

        let width = (area.width * 2 / 3).clamp(40.min(area.width), 70.min(area.width));
        let height = (8 + form.errors.len() as u16).min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let mut lines: Vec<Line> = form
            .errors
            .iter()
            .map(|error| Line::from(Span::styled(format!("• {}", error), theme.error())))
            .collect();

        lines.push(Line::from(Span::styled("Image URL", theme.accent())));
        let mut url = vec![Span::styled(form.url.clone(), theme.text())];
        if !form.is_submitting() {
            url.push(Span::styled("█", theme.accent()));
        }
        lines.push(Line::from(url));
        lines.push(Line::from(Span::styled(
            format!("[{}] Preview image", if form.preview_image { "x" } else { " " }),
            theme.text_secondary(),
        )));
        lines.push(Line::from(""));
        if form.is_submitting() {
            lines.push(Line::from(Span::styled("Adding image…", theme.info())));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Tab", theme.key_hint()),
                Span::styled(" preview  ", theme.key_description()),
                Span::styled("Enter", theme.key_hint()),
                Span::styled(" add  ", theme.key_description()),
                Span::styled("Esc", theme.key_hint()),
                Span::styled(" cancel", theme.key_description()),
            ]));
        }

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_border())
                    .title(Span::styled(" Add image ", theme.panel_title()))
                    .style(theme.panel_background()),
            ),
            popup,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        Some(Action::AddImage(AddImageAction::TogglePreview))
    }

    fn translate_text_input(&self, input: TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => AddImageAction::Char(c),
            TextInputAction::Backspace => AddImageAction::Backspace,
            TextInputAction::ClearLine => AddImageAction::ClearField,
            TextInputAction::Escape => AddImageAction::Cancel,
            TextInputAction::Confirm => AddImageAction::Submit,
        };
        Some(Action::AddImage(action))
    }
}
