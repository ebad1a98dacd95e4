//! Generic text input actions
//!
//! Translated by the active view into screen-specific actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    Backspace,
    /// Ctrl+U / Cmd+Backspace
    ClearLine,
    Escape,
    Confirm,
}
