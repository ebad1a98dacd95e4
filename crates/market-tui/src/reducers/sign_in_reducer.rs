//! Sign-in Form Reducer

use crate::actions::SignInAction;
use crate::state::{FormStage, SignInFormState};

pub fn reduce_sign_in(mut state: SignInFormState, action: &SignInAction) -> SignInFormState {
    let editable = !state.is_submitting();
    match action {
        SignInAction::Char(c) if editable => state.push_char(*c),
        SignInAction::Backspace if editable => state.pop_char(),
        SignInAction::ClearField if editable => state.clear_field(),
        SignInAction::NextField | SignInAction::PrevField => state.focus_other(),
        SignInAction::Submitting => {
            state.errors.clear();
            state.stage = FormStage::Submitting;
        }
        SignInAction::Rejected(errors) | SignInAction::Settled(Err(errors)) => {
            state.errors = errors.clone();
            state.stage = FormStage::Editing;
        }
        SignInAction::Settled(Ok(())) => {
            // Forget the typed password once the session exists
            return SignInFormState::default();
        }
        _ => {}
    }
    state
}
