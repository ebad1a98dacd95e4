//! Order history page (`/your-orders`)
//!
//! Up/Down move a cursor over the order lines of all orders; Enter opens the
//! item of the highlighted line.

use crate::actions::{Action, NavigationAction, OrdersPageAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::AppState;
use crate::view_models::orders::selected_line;
use crate::view_models::OrdersViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct OrdersView;

impl OrdersView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrdersView {
    fn default() -> Self {
        Self::new()
    }
}

/// Scroll offset that keeps rows `row..row + 2` (the highlighted line) inside
/// a viewport of `height` rows
fn follow_selection(scroll: u16, row: u16, height: u16) -> u16 {
    if row < scroll {
        row
    } else if row + 2 > scroll + height {
        (row + 2).saturating_sub(height)
    } else {
        scroll
    }
}

impl View for OrdersView {
    fn view_id(&self) -> ViewId {
        ViewId::Orders
    }

    fn route(&self) -> Option<Route> {
        Some(Route::Orders)
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;

        let mut selected_row = None;
        let lines: Vec<Line> = match OrdersViewModel::from_state(state) {
            OrdersViewModel::Loading => {
                vec![Line::from(Span::styled("Loading orders…", theme.info()))]
            }
            OrdersViewModel::Failed(message) => {
                vec![Line::from(Span::styled(message, theme.error()))]
            }
            OrdersViewModel::Empty => {
                vec![Line::from(Span::styled(
                    "You haven't placed any orders yet.",
                    theme.muted(),
                ))]
            }
            OrdersViewModel::Loaded(rows) => {
                let mut lines = Vec::new();
                for row in rows {
                    lines.push(Line::from(vec![
                        Span::styled(row.title, theme.section_header()),
                        Span::styled(format!("  {}", row.date), theme.muted()),
                        Span::styled(format!("  {}", row.summary), theme.price()),
                    ]));
                    for line in row.lines {
                        let (marker, name_style) = if line.selected {
                            selected_row = Some(lines.len() as u16);
                            ("▸ ", theme.selection())
                        } else {
                            ("  ", theme.text())
                        };
                        lines.push(Line::from(vec![
                            Span::styled(marker, theme.accent()),
                            Span::styled(line.name, name_style),
                        ]));
                        lines.push(Line::from(vec![
                            Span::styled(format!("    {}", line.price_breakdown), theme.price()),
                            Span::styled(format!("  {}", line.seller), theme.muted()),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
                lines
            }
        };

        let height = area.height.saturating_sub(2);
        let scroll = match selected_row {
            Some(row) => follow_selection(state.scroll, row, height),
            None => state.scroll,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(" Your orders ", theme.panel_title()));
        f.render_widget(
            Paragraph::new(lines).block(block).scroll((scroll, 0)),
            area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::SCROLL_VERTICAL | ViewCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => OrdersPageAction::NextLine,
            NavigationAction::Previous => OrdersPageAction::PrevLine,
        };
        Some(Action::OrdersPage(action))
    }

    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Enter => selected_line(state)
                .map(|line| vec![Action::go_to(Route::Item(line.id))])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FetchAction, GlobalAction};
    use crate::middleware::keyboard::KeyboardMiddleware;
    use crate::middleware::tests::recording_dispatcher;
    use crate::middleware::Middleware;
    use crate::reducers::app_reducer::reduce;
    use crate::thunks::tests::order;
    use crate::views::tests::{render_to_lines, screen_contains};
    use market_client::OrderLine;
    use ratatui::crossterm::event::KeyModifiers;

    fn orders_with_lines() -> AppState {
        let mut first = order(3);
        first.items = vec![
            OrderLine {
                id: 7,
                quantity: 2,
                purchase_price: 4.5,
                name: "Vase".to_string(),
                preview_image_url: None,
                shop_name: "potter".to_string(),
            },
            OrderLine {
                id: 8,
                quantity: 1,
                purchase_price: 3.0,
                name: "Mug".to_string(),
                preview_image_url: None,
                shop_name: "kiln".to_string(),
            },
        ];
        let state = reduce(AppState::default(), &Action::go_to(Route::Orders));
        reduce(state, &Action::Orders(FetchAction::Set(vec![first])))
    }

    /// Run a key through the keyboard middleware and reduce what it dispatches
    fn press(state: AppState, code: KeyCode) -> (AppState, Vec<Action>) {
        let (dispatcher, rx) = recording_dispatcher();
        let key = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)));
        KeyboardMiddleware::new().handle(&key, &state, &dispatcher);

        let mut state = state;
        let mut emitted = Vec::new();
        while let Ok(action) = rx.try_recv() {
            if matches!(action, Action::Navigate(_)) {
                KeyboardMiddleware::new().handle(&action, &state, &dispatcher);
                continue;
            }
            state = reduce(state, &action);
            emitted.push(action);
        }
        (state, emitted)
    }

    #[test]
    fn test_renders_orders() {
        let state = reduce(AppState::default(), &Action::go_to(Route::Orders));
        let state = reduce(state, &Action::Orders(FetchAction::Set(vec![order(3)])));
        let lines = render_to_lines(&state, 80, 20);
        assert!(screen_contains(&lines, "Order #3"));
        assert!(screen_contains(&lines, "Mar 05 2024"));
        assert!(screen_contains(&lines, "$9.99"));
    }

    #[test]
    fn test_lines_show_unit_price_and_seller() {
        let lines = render_to_lines(&orders_with_lines(), 80, 20);
        assert!(screen_contains(&lines, "$4.50 x 2 = $9.00"));
        assert!(screen_contains(&lines, "Sold by potter"));
        assert!(screen_contains(&lines, "▸ Vase"));
    }

    #[test]
    fn test_selecting_a_line_and_enter_opens_its_item() {
        let (state, _) = press(orders_with_lines(), KeyCode::Down);
        assert_eq!(state.orders_page.selected_line, 1);
        assert!(screen_contains(&render_to_lines(&state, 80, 20), "▸ Mug"));

        let (_, actions) = press(state, KeyCode::Enter);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::GoTo(Route::Item(8)))]
        ));
    }

    #[test]
    fn test_enter_without_lines_does_nothing() {
        let state = reduce(AppState::default(), &Action::go_to(Route::Orders));
        let view = OrdersView::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(view.translate_key(enter, &state).is_empty());
    }

    #[test]
    fn test_scroll_follows_selection() {
        assert_eq!(follow_selection(0, 3, 10), 0);
        assert_eq!(follow_selection(0, 12, 10), 4);
        assert_eq!(follow_selection(8, 2, 10), 2);
    }
}
