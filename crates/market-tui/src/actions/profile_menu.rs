//! Profile control actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuAction {
    /// Open when closed, close when open
    Toggle,
    Open,
    Close,
    /// Highlight the next entry
    Next,
    /// Highlight the previous entry
    Previous,
    /// Highlight the entry at this index (mouse hover/click)
    Select(usize),
    /// Activate the highlighted entry
    Activate,
    /// Log in with the configured demo account
    DemoLogin,
}
