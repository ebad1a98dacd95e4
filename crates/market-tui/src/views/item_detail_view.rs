//! Item detail page (`/items/:id`)
//!
//! Shows the item, its shop statistics and its reviews. The seller of the
//! item gets edit, add-image and delete bindings.

use crate::actions::{Action, AddImageAction, GlobalAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::AppState;
use crate::view_models::ItemDetailViewModel;
use crate::views::{AddImageView, ConfirmDeleteView, View, ViewId};
use market_client::ItemId;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ItemDetailView {
    item_id: ItemId,
}

impl ItemDetailView {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }

    fn is_owner(&self, state: &AppState) -> bool {
        matches!(
            ItemDetailViewModel::from_state(state, self.item_id),
            ItemDetailViewModel::Loaded { is_owner: true, .. }
        )
    }
}

impl View for ItemDetailView {
    fn view_id(&self) -> ViewId {
        ViewId::ItemDetail
    }

    fn route(&self) -> Option<Route> {
        Some(Route::Item(self.item_id))
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let vm = ItemDetailViewModel::from_state(state, self.item_id);

        let mut lines: Vec<Line> = Vec::new();
        match vm {
            ItemDetailViewModel::Loading => {
                lines.push(Line::from(Span::styled("Loading item…", theme.info())));
            }
            ItemDetailViewModel::Failed(message) => {
                lines.push(Line::from(Span::styled(message, theme.error())));
                lines.push(Line::from(Span::styled("Press r to retry.", theme.muted())));
            }
            ItemDetailViewModel::Loaded {
                name,
                price,
                shop_name,
                shop_stats,
                description,
                image_urls,
                reviews,
                reviews_error,
                is_owner,
            } => {
                lines.push(Line::from(Span::styled(name, theme.section_header())));
                lines.push(Line::from(Span::styled(price, theme.price())));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(shop_name, theme.accent()),
                    Span::styled("  ", theme.text()),
                    Span::styled(shop_stats, theme.rating()),
                ]));
                lines.push(Line::from(""));
                lines.extend(
                    description
                        .lines()
                        .map(|line| Line::from(Span::styled(line.to_string(), theme.text()))),
                );
                for url in image_urls {
                    lines.push(Line::from(Span::styled(format!("🖼 {}", url), theme.muted())));
                }
                if is_owner {
                    lines.push(Line::from(""));
                    lines.push(Line::from(vec![
                        Span::styled("e", theme.key_hint()),
                        Span::styled(" edit  ", theme.key_description()),
                        Span::styled("i", theme.key_hint()),
                        Span::styled(" add image  ", theme.key_description()),
                        Span::styled("x", theme.key_hint()),
                        Span::styled(" delete", theme.key_description()),
                    ]));
                }

                lines.push(Line::from(""));
                match reviews {
                    None => lines.push(Line::from(Span::styled("Loading reviews…", theme.info()))),
                    Some(reviews) => {
                        lines.push(Line::from(Span::styled(
                            format!("Reviews ({})", reviews.len()),
                            theme.section_header(),
                        )));
                        if let Some(error) = reviews_error {
                            lines.push(Line::from(Span::styled(error, theme.error())));
                        } else if reviews.is_empty() {
                            lines.push(Line::from(Span::styled("No reviews yet.", theme.muted())));
                        }
                        for review in reviews {
                            let mut header = vec![
                                Span::styled(review.stars, theme.rating()),
                                Span::styled(format!(" {}", review.author), theme.accent()),
                            ];
                            if let Some(date) = review.date {
                                header.push(Span::styled(format!(" · {}", date), theme.muted()));
                            }
                            lines.push(Line::from(header));
                            lines.push(Line::from(Span::styled(review.text, theme.text())));
                        }
                    }
                }
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(format!(" Item #{} ", self.item_id), theme.panel_title()));
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((state.scroll, 0)),
            area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::SCROLL_VERTICAL
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_key(&self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if !self.is_owner(state) {
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('e') => vec![Action::go_to(Route::EditItem(self.item_id))],
            KeyCode::Char('i') => vec![
                Action::AddImage(AddImageAction::Open(self.item_id)),
                Action::Global(GlobalAction::PushView(Box::new(AddImageView::new(self.item_id)))),
            ],
            KeyCode::Char('x') => vec![Action::Global(GlobalAction::PushView(Box::new(
                ConfirmDeleteView::new(self.item_id),
            )))],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FetchAction, SessionAction};
    use crate::reducers::app_reducer::reduce;
    use crate::state::RequestId;
    use crate::thunks::tests::item;
    use crate::views::tests::{render_to_lines, screen_contains};
    use market_client::User;
    use ratatui::crossterm::event::KeyModifiers;

    fn on_item_page() -> AppState {
        let state = reduce(AppState::default(), &Action::go_to(Route::Item(7)));
        reduce(state, &Action::ItemPage(FetchAction::Set(item(7, "Blue Vase"))))
    }

    #[test]
    fn test_renders_loaded_item() {
        let lines = render_to_lines(&on_item_page(), 80, 24);
        assert!(screen_contains(&lines, "Blue Vase"));
        assert!(screen_contains(&lines, "$12.50"));
        assert!(screen_contains(&lines, "Loading reviews"));
    }

    #[test]
    fn test_renders_loading_and_error() {
        let state = reduce(AppState::default(), &Action::go_to(Route::Item(7)));
        let state = reduce(state, &Action::ItemPage(FetchAction::Started(RequestId(1))));
        assert!(screen_contains(&render_to_lines(&state, 80, 24), "Loading item"));

        let state = reduce(
            state,
            &Action::ItemPage(FetchAction::Failed(RequestId(1), "Item couldn't be found".to_string())),
        );
        assert!(screen_contains(&render_to_lines(&state, 80, 24), "Item couldn't be found"));
    }

    #[test]
    fn test_only_seller_can_edit() {
        let view = ItemDetailView::new(7);
        let edit = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);

        assert!(view.translate_key(edit, &on_item_page()).is_empty());

        let state = reduce(
            on_item_page(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: String::new(),
            })),
        );
        assert!(matches!(
            view.translate_key(edit, &state).as_slice(),
            [Action::Global(GlobalAction::GoTo(Route::EditItem(7)))]
        ));
    }

    #[test]
    fn test_seller_opens_add_image_popup() {
        let view = ItemDetailView::new(7);
        let add = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert!(view.translate_key(add, &on_item_page()).is_empty());

        let state = reduce(
            on_item_page(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: String::new(),
            })),
        );
        let actions = view.translate_key(add, &state);
        assert!(matches!(
            actions.as_slice(),
            [
                Action::AddImage(AddImageAction::Open(7)),
                Action::Global(GlobalAction::PushView(_))
            ]
        ));

        let state = actions.iter().fold(state, |state, action| reduce(state, action));
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::AddImage));
        assert_eq!(state.active_route(), Route::Item(7));
        assert!(state.add_image.is_some());
    }
}
