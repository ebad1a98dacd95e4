//! Status bar actions

use crate::state::Notice;

#[derive(Debug, Clone)]
pub enum StatusBarAction {
    Show(Notice),
    Dismiss,
}
