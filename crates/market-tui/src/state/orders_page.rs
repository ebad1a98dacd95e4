//! Order history page state

/// Highlighted order line, counted across all orders in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdersPageState {
    pub selected_line: usize,
}
