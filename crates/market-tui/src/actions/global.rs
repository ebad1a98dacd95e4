use crate::route::Route;
use crate::views::View;
use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press from the terminal
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Terminal size changed
    Resize { width: u16, height: u16 },
    /// Navigate to a route, replacing the current page
    GoTo(Route),
    /// Re-fetch whatever the current page shows
    Refresh,
    /// Scroll the current page by the given number of lines
    ScrollBy(i16),
    /// Push a floating view (popup) onto the view stack
    PushView(Box<dyn View>),
    /// Close the top-most floating view
    Close,
    /// Quit the application
    Quit,
}
