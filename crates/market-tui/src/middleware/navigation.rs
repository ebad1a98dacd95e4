//! NavigationMiddleware - page lifecycle
//!
//! Runs before the reducer sees a `GoTo`, so `state` still describes the page
//! being left. Responsibilities:
//! - redirect gated routes home when there is no session
//! - tear down the page being left (in-flight fetches are discarded)
//! - mount the new page (fetch-on-mount, form seeding)
//! - re-fetch the current page on `Refresh`

use crate::actions::{
    Action, FetchAction, GlobalAction, ItemFormAction, SessionAction, StatusBarAction, Thunk,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::route::Route;
use crate::state::{AppState, Notice};
use market_client::{ItemId, ItemUpdate};

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Returns false when the navigation was redirected
    fn navigate(&self, to: Route, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if to.requires_session() && !state.session.is_logged_in() {
            log::info!("Navigation: {} requires a session, redirecting home", to);
            dispatcher.dispatch(Action::go_to(Route::Home));
            notify(dispatcher, Notice::error(format!("Sign in to open {}", to.title().to_lowercase())));
            return false;
        }

        if let Route::EditItem(item_id) = to {
            match edit_seed(item_id, state) {
                Some(seed) => {
                    dispatcher.dispatch(Action::ItemForm(ItemFormAction::OpenEdit { item_id, seed }));
                }
                None => {
                    log::info!("Navigation: item {} is not editable here", item_id);
                    dispatcher.dispatch(Action::go_to(Route::Item(item_id)));
                    notify(dispatcher, Notice::error("Only the seller can edit this item"));
                    return false;
                }
            }
        }

        let from = state.active_route();
        if from == to {
            return true;
        }

        log::debug!("Navigation: {} -> {}", from, to);
        self.teardown(from, dispatcher);
        self.mount(to, dispatcher);
        true
    }

    fn teardown(&self, from: Route, dispatcher: &Dispatcher) {
        match from {
            Route::Item(_) => {
                dispatcher.dispatch(Action::ItemPage(FetchAction::Discard));
                dispatcher.dispatch(Action::ItemReviews(FetchAction::Discard));
            }
            Route::Orders => dispatcher.dispatch(Action::Orders(FetchAction::Discard)),
            _ => {}
        }
    }

    fn mount(&self, to: Route, dispatcher: &Dispatcher) {
        match to {
            Route::Item(item_id) => fetch_item(item_id, dispatcher),
            Route::Orders => dispatcher.dispatch(Action::thunk(Thunk::GetOrders)),
            Route::ListProduct => dispatcher.dispatch(Action::ItemForm(ItemFormAction::OpenCreate)),
            _ => {}
        }
    }

    fn refresh(&self, state: &AppState, dispatcher: &Dispatcher) {
        match state.active_route() {
            Route::Item(item_id) => fetch_item(item_id, dispatcher),
            Route::Orders if state.session.is_logged_in() => {
                dispatcher.dispatch(Action::thunk(Thunk::GetOrders));
            }
            route => log::debug!("Navigation: nothing to refresh on {}", route),
        }
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_item(item_id: ItemId, dispatcher: &Dispatcher) {
    dispatcher.dispatch(Action::thunk(Thunk::GetItemDetails { item_id }));
    dispatcher.dispatch(Action::thunk(Thunk::GetItemReviews { item_id }));
}

fn notify(dispatcher: &Dispatcher, notice: Notice) {
    dispatcher.dispatch(Action::StatusBar(StatusBarAction::Show(notice)));
}

/// Values the edit form starts with: the item currently shown, if the
/// signed-in user sells it
fn edit_seed(item_id: ItemId, state: &AppState) -> Option<ItemUpdate> {
    let item = state.item_page.data().filter(|item| item.id == item_id)?;
    let user = state.session.user.as_ref()?;
    if item.seller_id != Some(user.id) {
        return None;
    }
    Some(ItemUpdate {
        name: item.name.clone(),
        price: item.price,
        description: item.description.clone(),
    })
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::GoTo(route)) => self.navigate(*route, state, dispatcher),
            Action::Global(GlobalAction::Refresh) => {
                self.refresh(state, dispatcher);
                false
            }
            Action::Session(SessionAction::Clear) => {
                if state.active_route().requires_session() {
                    dispatcher.dispatch(Action::go_to(Route::Home));
                }
                true
            }
            _ => true,
        }
    }
}
