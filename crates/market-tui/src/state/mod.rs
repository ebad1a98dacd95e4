//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod add_image;
mod app;
mod home;
mod item_form;
mod orders_page;
mod profile_menu;
mod resource;
mod session;
mod sign_in;
mod status_bar;

pub use add_image::AddImageState;
pub use app::AppState;
pub use home::HomeState;
pub use item_form::{
    FormStage, ItemFormField, ItemFormMode, ItemFormState, ValidatedItem, DESCRIPTION_MAX_LEN,
    NAME_MAX_LEN,
};
pub use orders_page::OrdersPageState;
pub use profile_menu::{GuestControl, ProfileMenuEntry, ProfileMenuState};
pub use resource::{FetchStatus, RequestId, RequestIds, Resource};
pub use session::SessionState;
pub use sign_in::{SignInField, SignInFormState};
pub use status_bar::{Notice, NoticeLevel, StatusBarState};
