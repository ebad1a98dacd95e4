//! Add-image popup actions

use super::ThunkResult;
use market_client::ItemId;

#[derive(Debug, Clone)]
pub enum AddImageAction {
    /// Start with an empty URL for this item
    Open(ItemId),
    Char(char),
    Backspace,
    ClearField,
    /// Flip the "use as preview" checkbox
    TogglePreview,
    /// Enter pressed: validate and send
    Submit,
    /// Local checks passed, request is in flight (clears errors)
    Submitting,
    Rejected(Vec<String>),
    /// The add-image request finished
    Settled(ThunkResult<()>),
    /// Close the popup without adding anything
    Cancel,
}
