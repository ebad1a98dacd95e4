//! Reducers
//!
//! Pure functions `(state, &action) -> state`. The root reducer in
//! `app_reducer` hands each action to the sub-reducer of the sub-tree it
//! targets; every other sub-tree is left untouched.

pub mod add_image_reducer;
pub mod app_reducer;
pub mod home_reducer;
pub mod item_form_reducer;
pub mod orders_page_reducer;
pub mod profile_menu_reducer;
pub mod resource_reducer;
pub mod session_reducer;
pub mod sign_in_reducer;
pub mod status_bar_reducer;
