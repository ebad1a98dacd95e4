//! FormMiddleware - submit flow of the item, sign-in and add-image forms
//!
//! `Submit` runs the local checks. Failures come back as `Rejected` without a
//! network call; otherwise the form moves to `Submitting` and the matching
//! thunk is dispatched. A successful `Settled` navigates away (or closes the
//! add-image popup).
//!
//! The state snapshot only shows `Submitting` once the main thread has
//! reduced it, so each form also keeps an in-flight flag here. A second
//! `Submit` queued behind the first finds the flag set and is dropped.

use crate::actions::{
    Action, AddImageAction, GlobalAction, ItemFormAction, LoginOrigin, SignInAction, Thunk,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::route::Route;
use crate::state::{AppState, ItemFormMode};
use crate::views::ViewId;

#[derive(Debug, Default)]
pub struct FormMiddleware {
    item_in_flight: bool,
    sign_in_in_flight: bool,
    image_in_flight: bool,
}

impl FormMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit_item(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(form) = state.item_form.as_ref() else {
            log::warn!("Item form submitted but no form is open");
            return;
        };
        if self.item_in_flight || form.is_submitting() {
            log::debug!("Item form: already submitting, ignoring");
            return;
        }

        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                log::debug!("Item form: rejected locally: {:?}", errors);
                dispatcher.dispatch(Action::ItemForm(ItemFormAction::Rejected(errors)));
                return;
            }
        };

        self.item_in_flight = true;
        dispatcher.dispatch(Action::ItemForm(ItemFormAction::Submitting));
        let thunk = match form.mode {
            ItemFormMode::Edit(item_id) => Thunk::EditItem {
                item_id,
                update: valid.to_update(),
            },
            ItemFormMode::Create => Thunk::CreateItem {
                item: valid.to_new_item(),
            },
        };
        dispatcher.dispatch(Action::thunk(thunk));
    }

    fn submit_sign_in(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        if self.sign_in_in_flight || state.sign_in.is_submitting() {
            return;
        }
        match state.sign_in.validate() {
            Ok(credentials) => {
                self.sign_in_in_flight = true;
                dispatcher.dispatch(Action::SignIn(SignInAction::Submitting));
                dispatcher.dispatch(Action::thunk(Thunk::Login {
                    credentials,
                    origin: LoginOrigin::SignInForm,
                }));
            }
            Err(errors) => dispatcher.dispatch(Action::SignIn(SignInAction::Rejected(errors))),
        }
    }

    fn submit_image(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(form) = state.add_image.as_ref() else {
            log::warn!("Add image submitted but the popup is not open");
            return;
        };
        if self.image_in_flight || form.is_submitting() {
            return;
        }
        match form.validate() {
            Ok(image) => {
                self.image_in_flight = true;
                dispatcher.dispatch(Action::AddImage(AddImageAction::Submitting));
                dispatcher.dispatch(Action::thunk(Thunk::AddItemImage {
                    item_id: form.item_id,
                    image,
                }));
            }
            Err(errors) => dispatcher.dispatch(Action::AddImage(AddImageAction::Rejected(errors))),
        }
    }
}

/// Pop the add-image popup if it is the top view
fn close_image_popup(state: &AppState, dispatcher: &Dispatcher) {
    if state.active_view().map(|v| v.view_id()) == Some(ViewId::AddImage) {
        dispatcher.dispatch(Action::Global(GlobalAction::Close));
    }
}

impl Middleware for FormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::ItemForm(ItemFormAction::Submit) => {
                self.submit_item(state, dispatcher);
                false
            }
            Action::ItemForm(ItemFormAction::Settled(outcome)) => {
                self.item_in_flight = false;
                if let Ok(item_id) = outcome {
                    dispatcher.dispatch(Action::go_to(Route::Item(*item_id)));
                }
                true
            }
            Action::ItemForm(ItemFormAction::OpenEdit { .. } | ItemFormAction::OpenCreate) => {
                self.item_in_flight = false;
                true
            }
            Action::ItemForm(ItemFormAction::Cancel) => {
                self.item_in_flight = false;
                let back = match state.item_form.as_ref().map(|f| f.mode) {
                    Some(ItemFormMode::Edit(item_id)) => Route::Item(item_id),
                    _ => Route::Home,
                };
                dispatcher.dispatch(Action::go_to(back));
                false
            }
            Action::SignIn(SignInAction::Submit) => {
                self.submit_sign_in(state, dispatcher);
                false
            }
            Action::SignIn(SignInAction::Settled(outcome)) => {
                self.sign_in_in_flight = false;
                if outcome.is_ok() {
                    dispatcher.dispatch(Action::go_to(Route::Home));
                }
                true
            }
            Action::SignIn(SignInAction::Cancel) => {
                self.sign_in_in_flight = false;
                dispatcher.dispatch(Action::go_to(Route::Home));
                false
            }
            Action::AddImage(AddImageAction::Open(_)) => {
                self.image_in_flight = false;
                true
            }
            Action::AddImage(AddImageAction::Submit) => {
                self.submit_image(state, dispatcher);
                false
            }
            Action::AddImage(AddImageAction::Settled(outcome)) => {
                self.image_in_flight = false;
                if outcome.is_ok() {
                    close_image_popup(state, dispatcher);
                }
                true
            }
            Action::AddImage(AddImageAction::Cancel) => {
                self.image_in_flight = false;
                close_image_popup(state, dispatcher);
                true
            }
            _ => true,
        }
    }
}
