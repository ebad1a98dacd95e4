//! Add Image Reducer
//!
//! The popup state is dropped on success and on cancel.

use crate::actions::AddImageAction;
use crate::state::{AddImageState, FormStage};

pub fn reduce_add_image(
    state: Option<AddImageState>,
    action: &AddImageAction,
) -> Option<AddImageState> {
    match action {
        AddImageAction::Open(item_id) => Some(AddImageState::new(*item_id)),
        AddImageAction::Settled(Ok(())) | AddImageAction::Cancel => None,
        _ => state.map(|form| reduce_open_popup(form, action)),
    }
}

fn reduce_open_popup(mut form: AddImageState, action: &AddImageAction) -> AddImageState {
    let editable = !form.is_submitting();
    match action {
        AddImageAction::Char(c) if editable => form.push_char(*c),
        AddImageAction::Backspace if editable => {
            form.url.pop();
        }
        AddImageAction::ClearField if editable => form.url.clear(),
        AddImageAction::TogglePreview if editable => form.preview_image = !form.preview_image,
        AddImageAction::Submitting => {
            form.errors.clear();
            form.stage = FormStage::Submitting;
        }
        AddImageAction::Rejected(errors) | AddImageAction::Settled(Err(errors)) => {
            form.errors = errors.clone();
            form.stage = FormStage::Editing;
        }
        _ => {}
    }
    form
}
