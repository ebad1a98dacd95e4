//! Item Form Reducer
//!
//! Form-local state of the edit and create forms. Submitting is a middleware
//! concern (validation, thunk dispatch); the reducer only tracks the stage and
//! the error list.

use crate::actions::ItemFormAction;
use crate::state::{FormStage, ItemFormState};

pub fn reduce_item_form(
    state: Option<ItemFormState>,
    action: &ItemFormAction,
) -> Option<ItemFormState> {
    match action {
        ItemFormAction::OpenEdit { item_id, seed } => Some(ItemFormState::edit(*item_id, seed)),
        ItemFormAction::OpenCreate => Some(ItemFormState::create()),
        _ => state.map(|form| reduce_open_form(form, action)),
    }
}

fn reduce_open_form(mut form: ItemFormState, action: &ItemFormAction) -> ItemFormState {
    let editable = !form.is_submitting();
    match action {
        ItemFormAction::Char(c) if editable => form.push_char(*c),
        ItemFormAction::Backspace if editable => form.pop_char(),
        ItemFormAction::ClearField if editable => form.clear_field(),
        ItemFormAction::NextField => form.focus_next(),
        ItemFormAction::PrevField => form.focus_prev(),
        ItemFormAction::Submitting => {
            form.errors.clear();
            form.stage = FormStage::Submitting;
        }
        ItemFormAction::Rejected(errors) => {
            form.errors = errors.clone();
            form.stage = FormStage::Editing;
        }
        ItemFormAction::Settled(Ok(item_id)) => {
            log::debug!("Item form: saved item {}", item_id);
            form.stage = FormStage::Editing;
        }
        ItemFormAction::Settled(Err(errors)) => {
            form.errors = errors.clone();
            form.stage = FormStage::Editing;
        }
        _ => {}
    }
    form
}
