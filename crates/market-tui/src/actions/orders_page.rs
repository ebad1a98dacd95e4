//! Order history page actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersPageAction {
    /// Highlight the next order line
    NextLine,
    /// Highlight the previous order line
    PrevLine,
}
