//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Store actions that target one of the four store sub-trees
//! - Screen-specific actions for view-local state
//! - Thunks, which describe async work instead of a state change

pub mod add_image;
pub mod fetch;
pub mod global;
pub mod home;
pub mod item_form;
pub mod navigation;
pub mod orders_page;
pub mod profile_menu;
pub mod session;
pub mod sign_in;
pub mod status_bar;
pub mod text_input;
pub mod thunk;

pub use add_image::AddImageAction;
pub use fetch::FetchAction;
pub use global::GlobalAction;
pub use home::HomeAction;
pub use item_form::ItemFormAction;
pub use navigation::NavigationAction;
pub use orders_page::OrdersPageAction;
pub use profile_menu::ProfileMenuAction;
pub use session::SessionAction;
pub use sign_in::SignInAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;
pub use thunk::{LoginOrigin, Thunk, ThunkResult};

use market_client::{Item, Order, Review};

/// Root action enum - tagged by sub-tree/screen
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - translated by the active view
    Navigate(NavigationAction),
    /// Generic text input action - translated by the active view
    TextInput(TextInputAction),

    /// Global application actions
    Global(GlobalAction),

    // Store sub-trees
    Session(SessionAction),
    ItemPage(FetchAction<Item>),
    ItemReviews(FetchAction<Vec<Review>>),
    Orders(FetchAction<Vec<Order>>),

    // View-local state
    Home(HomeAction),
    ItemForm(ItemFormAction),
    AddImage(AddImageAction),
    OrdersPage(OrdersPageAction),
    SignIn(SignInAction),
    ProfileMenu(ProfileMenuAction),
    StatusBar(StatusBarAction),

    /// Async work, consumed by the thunk middleware
    Thunk(Thunk),

    /// No-op action
    None,
}

impl Action {
    /// Shorthand for `Action::Thunk(..)`
    pub fn thunk(thunk: Thunk) -> Action {
        Action::Thunk(thunk)
    }

    /// Shorthand for navigating to a route
    pub fn go_to(route: crate::route::Route) -> Action {
        Action::Global(GlobalAction::GoTo(route))
    }
}
