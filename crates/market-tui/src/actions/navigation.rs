//! Generic navigation actions
//!
//! Translated by the active view into screen-specific actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Down arrow, `j`, Tab
    Next,
    /// Up arrow, `k`, Shift+Tab
    Previous,
}
