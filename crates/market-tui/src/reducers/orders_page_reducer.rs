//! Orders Page Reducer
//!
//! `line_count` is the number of order lines currently loaded. The cursor
//! stops at both ends.

use crate::actions::OrdersPageAction;
use crate::state::OrdersPageState;

pub fn reduce_orders_page(
    mut state: OrdersPageState,
    action: &OrdersPageAction,
    line_count: usize,
) -> OrdersPageState {
    let last = line_count.saturating_sub(1);
    match action {
        OrdersPageAction::NextLine => {
            state.selected_line = (state.selected_line + 1).min(last);
        }
        OrdersPageAction::PrevLine => {
            state.selected_line = state.selected_line.min(last).saturating_sub(1);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_ends() {
        let state = reduce_orders_page(OrdersPageState::default(), &OrdersPageAction::PrevLine, 3);
        assert_eq!(state.selected_line, 0);

        let mut state = state;
        for _ in 0..5 {
            state = reduce_orders_page(state, &OrdersPageAction::NextLine, 3);
        }
        assert_eq!(state.selected_line, 2);
    }

    #[test]
    fn test_no_lines() {
        let state = reduce_orders_page(OrdersPageState::default(), &OrdersPageAction::NextLine, 0);
        assert_eq!(state.selected_line, 0);
    }
}
