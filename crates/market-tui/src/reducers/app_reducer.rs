use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    add_image_reducer, home_reducer, item_form_reducer, orders_page_reducer, profile_menu_reducer,
    resource_reducer, session_reducer, sign_in_reducer, status_bar_reducer,
};
use crate::route::Route;
use crate::state::{AppState, OrdersPageState, ProfileMenuEntry, ProfileMenuState, SignInFormState};
use crate::views;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),

        Action::Session(action) => {
            state.session = session_reducer::reduce_session(state.session, action);
        }
        Action::ItemPage(action) => {
            state.item_page = resource_reducer::reduce_resource(state.item_page, action);
        }
        Action::ItemReviews(action) => {
            state.item_reviews = resource_reducer::reduce_resource(state.item_reviews, action);
        }
        Action::Orders(action) => {
            state.orders = resource_reducer::reduce_resource(state.orders, action);
        }

        Action::Home(action) => {
            state.home = home_reducer::reduce_home(state.home, action);
        }
        Action::ItemForm(action) => {
            state.item_form = item_form_reducer::reduce_item_form(state.item_form, action);
        }
        Action::AddImage(action) => {
            state.add_image = add_image_reducer::reduce_add_image(state.add_image, action);
        }
        Action::OrdersPage(action) => {
            let line_count = state
                .orders
                .data()
                .map(|orders| orders.iter().map(|order| order.items.len()).sum())
                .unwrap_or(0);
            state.orders_page =
                orders_page_reducer::reduce_orders_page(state.orders_page, action, line_count);
        }
        Action::SignIn(action) => {
            state.sign_in = sign_in_reducer::reduce_sign_in(state.sign_in, action);
        }
        Action::ProfileMenu(action) => {
            let entry_count = ProfileMenuEntry::entries(state.session.user.as_ref()).len();
            state.profile_menu =
                profile_menu_reducer::reduce_profile_menu(state.profile_menu, action, entry_count);
        }
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);
        }

        // Generic and async actions are resolved by middleware
        Action::Navigate(_) | Action::TextInput(_) | Action::Thunk(_) | Action::None => {}
    }

    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::GoTo(route) => {
            log::debug!("Navigating to {}", route);
            state.view_stack.clear();
            state.view_stack.push(views::view_for(*route));
            state.profile_menu = ProfileMenuState::default();
            state.scroll = 0;
            state.item_form = None;
            state.orders_page = OrdersPageState::default();
            state.add_image = None;
            if *route == Route::SignIn {
                state.sign_in = SignInFormState::default();
            }
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top closes it instead
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!("Popping view {:?}, it is on top already", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // The page at the bottom of the stack is never popped
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            }
        }
        GlobalAction::Resize { width, height } => {
            state.viewport.width = *width;
            state.viewport.height = *height;
        }
        GlobalAction::ScrollBy(delta) => {
            state.scroll = state.scroll.saturating_add_signed(*delta);
        }
        GlobalAction::KeyPressed(_) | GlobalAction::Click { .. } | GlobalAction::Refresh => {}
    }
    state
}
