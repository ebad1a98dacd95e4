//! Status bar
//!
//! Renders the current notice, or key hints for the active view.

use crate::state::{AppState, NoticeLevel};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    let capabilities = state
        .active_view()
        .map(|v| v.capabilities(state))
        .unwrap_or_default();

    if state.profile_menu.open {
        &[("↑↓", "select"), ("Enter", "open"), ("Esc", "close")]
    } else if capabilities.accepts_text_input() {
        &[("Tab", "next field"), ("Enter", "submit"), ("Esc", "cancel")]
    } else if state.session.is_logged_in() {
        &[
            ("p", "profile"),
            ("h", "home"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("s", "sign in"),
            ("d", "demo"),
            ("h", "home"),
            ("q", "quit"),
        ]
    }
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let line = match &state.status_bar.notice {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => theme.success(),
                NoticeLevel::Error => theme.error(),
            };
            Line::from(Span::styled(format!(" {}", notice.text), style))
        }
        None => {
            let mut spans = vec![Span::raw(" ")];
            for (key, description) in hints(state) {
                spans.push(Span::styled(*key, theme.key_hint()));
                spans.push(Span::styled(format!(" {}  ", description), theme.key_description()));
            }
            Line::from(spans)
        }
    };

    f.render_widget(Paragraph::new(line).style(theme.panel_background()), area);
}
