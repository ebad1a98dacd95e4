//! Thunks - async work described as data
//!
//! Dispatching `Action::Thunk` hands the work to the thunk middleware, which
//! runs the matching action creator (see `crate::thunks`) on its runtime.

use market_client::{Credentials, ItemId, ItemUpdate, NewItem, NewItemImage};

/// Outcome of an action creator: the payload, or the user-facing error list
pub type ThunkResult<T> = Result<T, Vec<String>>;

/// Where a login was started from (decides where the outcome is reported)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOrigin {
    DemoButton,
    SignInForm,
}

/// A deferred remote operation
#[derive(Debug, Clone)]
pub enum Thunk {
    GetItemDetails {
        item_id: ItemId,
    },
    GetItemReviews {
        item_id: ItemId,
    },
    EditItem {
        item_id: ItemId,
        update: ItemUpdate,
    },
    CreateItem {
        item: NewItem,
    },
    DeleteItem {
        item_id: ItemId,
    },
    AddItemImage {
        item_id: ItemId,
        image: NewItemImage,
    },
    GetOrders,
    Login {
        credentials: Credentials,
        origin: LoginOrigin,
    },
    Logout,
}
