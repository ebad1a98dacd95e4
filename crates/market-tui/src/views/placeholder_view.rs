//! Placeholder pages (`/your-listings`, `/your-reviews`)

use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PlaceholderView {
    route: Route,
}

impl PlaceholderView {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

impl View for PlaceholderView {
    fn view_id(&self) -> ViewId {
        ViewId::Placeholder
    }

    fn route(&self) -> Option<Route> {
        Some(self.route)
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(format!(" {} ", self.route.title()), theme.panel_title()));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled("Nothing here yet.", theme.muted())),
        ];
        f.render_widget(Paragraph::new(text).block(block), area);
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
