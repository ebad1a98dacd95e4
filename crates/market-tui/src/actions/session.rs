//! Session actions

use market_client::User;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// A login succeeded
    Set(User),
    /// The user logged out
    Clear,
}
