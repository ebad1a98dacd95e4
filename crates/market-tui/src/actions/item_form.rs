//! Item form actions (edit an item, list a new product)

use super::ThunkResult;
use market_client::{ItemId, ItemUpdate};

#[derive(Debug, Clone)]
pub enum ItemFormAction {
    /// Open the edit form seeded with the values the item had when it was opened
    OpenEdit { item_id: ItemId, seed: ItemUpdate },
    /// Open an empty form for a new listing
    OpenCreate,
    /// Character typed into the focused field
    Char(char),
    /// Backspace in the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Focus the next field (Tab)
    NextField,
    /// Focus the previous field (Shift+Tab)
    PrevField,
    /// Enter pressed: validate and send
    Submit,
    /// Local checks passed, request is in flight (clears errors)
    Submitting,
    /// Local checks failed; show these errors
    Rejected(Vec<String>),
    /// The edit/create request finished
    Settled(ThunkResult<ItemId>),
    /// Leave the form without saving
    Cancel,
}
