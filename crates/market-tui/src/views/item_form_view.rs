//! Item Form View
//!
//! Edit form (`/items/:id/edit`) and new listing form (`/list-product`).

use crate::actions::{Action, ItemFormAction, NavigationAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::{AppState, ItemFormField, ItemFormState};
use crate::views::{View, ViewId};
use market_client::ItemId;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ItemFormView {
    /// `None` for a new listing
    item_id: Option<ItemId>,
}

impl ItemFormView {
    pub fn edit(item_id: ItemId) -> Self {
        Self {
            item_id: Some(item_id),
        }
    }

    pub fn create() -> Self {
        Self { item_id: None }
    }
}

fn field_lines<'a>(form: &'a ItemFormState, state: &'a AppState) -> Vec<Line<'a>> {
    let theme = &state.theme;
    let mut lines = Vec::new();
    for field in form.fields() {
        let focused = *field == form.focused_field;
        let label_style = if focused {
            theme.accent()
        } else {
            theme.text_secondary()
        };
        let marker = if focused { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, field.label()),
            label_style,
        )));

        let value = form.value(*field);
        let mut value_spans = vec![Span::styled(format!("  {}", value), theme.text())];
        if focused && !form.is_submitting() {
            value_spans.push(Span::styled("█", theme.accent()));
        }
        lines.push(Line::from(value_spans));

        let hint = match field {
            ItemFormField::Name | ItemFormField::Description => {
                format!("  {}/{}", value.chars().count(), field.max_len())
            }
            ItemFormField::Price => "  at least 0.01".to_string(),
            ItemFormField::ImageUrls => "  comma separated".to_string(),
        };
        lines.push(Line::from(Span::styled(hint, theme.muted())));
    }
    lines
}

impl View for ItemFormView {
    fn view_id(&self) -> ViewId {
        ViewId::ItemForm
    }

    fn route(&self) -> Option<Route> {
        Some(match self.item_id {
            Some(item_id) => Route::EditItem(item_id),
            None => Route::ListProduct,
        })
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let title = match self.item_id {
            Some(_) => " Edit Your Item ",
            None => " List a product ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(title, theme.panel_title()));

        let Some(form) = &state.item_form else {
            f.render_widget(
                Paragraph::new(Span::styled("Loading form…", theme.info())).block(block),
                area,
            );
            return;
        };

        let mut lines: Vec<Line> = form
            .errors
            .iter()
            .map(|error| Line::from(Span::styled(format!("• {}", error), theme.error())))
            .collect();
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(field_lines(form, state));
        if form.is_submitting() {
            lines.push(Line::from(Span::styled("Saving…", theme.info())));
        }

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((state.scroll, 0)),
            area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        ViewCapabilities::TEXT_INPUT | ViewCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => ItemFormAction::NextField,
            NavigationAction::Previous => ItemFormAction::PrevField,
        };
        Some(Action::ItemForm(action))
    }

    fn translate_text_input(&self, input: TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => ItemFormAction::Char(c),
            TextInputAction::Backspace => ItemFormAction::Backspace,
            TextInputAction::ClearLine => ItemFormAction::ClearField,
            TextInputAction::Escape => ItemFormAction::Cancel,
            TextInputAction::Confirm => ItemFormAction::Submit,
        };
        Some(Action::ItemForm(action))
    }
}
