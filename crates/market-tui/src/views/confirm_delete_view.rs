//! Confirm Delete View
//!
//! Floating popup asking before a listing is deleted.

use crate::actions::{Action, GlobalAction, Thunk};
use crate::capabilities::ViewCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use market_client::ItemId;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ConfirmDeleteView {
    item_id: ItemId,
}

impl ConfirmDeleteView {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }
}

impl View for ConfirmDeleteView {
    fn view_id(&self) -> ViewId {
        ViewId::ConfirmDelete
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;

        // Dim everything below the popup
        f.render_widget(
            Block::default().style(Style::default().add_modifier(Modifier::DIM)),
            area,
        );

        let width = (area.width / 2).clamp(30.min(area.width), 50.min(area.width));
        let height = 6.min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let name = state
            .item_page
            .data()
            .filter(|item| item.id == self.item_id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| format!("item {}", self.item_id));

        let text = vec![
            Line::from(Span::styled(format!("Delete \"{}\"?", name), theme.text())),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", theme.key_hint()),
                Span::styled(" delete  ", theme.key_description()),
                Span::styled("n", theme.key_hint()),
                Span::styled(" keep", theme.key_description()),
            ]),
        ];

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.error())
                    .title(Span::styled(" Delete listing ", theme.error()))
                    .style(theme.panel_background()),
            ),
            popup,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_key(&self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => vec![
                Action::Global(GlobalAction::Close),
                Action::thunk(Thunk::DeleteItem {
                    item_id: self.item_id,
                }),
            ],
            // Swallow every other key so nothing leaks to the page below
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                vec![Action::Global(GlobalAction::Close)]
            }
            _ => vec![Action::None],
        }
    }
}
