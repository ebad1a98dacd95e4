use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::route::Route;
use crate::state::AppState;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

pub mod add_image_view;
pub mod confirm_delete_view;
pub mod header;
pub mod home_view;
pub mod item_detail_view;
pub mod item_form_view;
pub mod orders_view;
pub mod placeholder_view;
pub mod sign_in_view;
pub mod status_bar;

pub use add_image_view::AddImageView;
pub use confirm_delete_view::ConfirmDeleteView;
pub use home_view::HomeView;
pub use item_detail_view::ItemDetailView;
pub use item_form_view::ItemFormView;
pub use orders_view::OrdersView;
pub use placeholder_view::PlaceholderView;
pub use sign_in_view::SignInView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    ItemDetail,
    ItemForm,
    Orders,
    Placeholder,
    SignIn,
    ConfirmDelete,
    AddImage,
}

/// View trait - defines the interface that all views must implement
///
/// Views are stored as trait objects on the view stack. The page at the bottom
/// of the stack has a route; floating views (popups) on top of it do not.
///
/// The trait must stay object-safe, `Send` and `Sync` (views travel inside actions
/// between threads).
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Route this page is shown for (`None` for floating views)
    fn route(&self) -> Option<Route> {
        None
    }

    /// Render this view
    ///
    /// Pages get the body area between header and status bar, floating
    /// views get the whole terminal.
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> ViewCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// View-specific single-key bindings, consulted before the global ones
    fn translate_key(&self, _key: KeyEvent, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// The page shown for a route
pub fn view_for(route: Route) -> Box<dyn View> {
    match route {
        Route::Home => Box::new(HomeView::new()),
        Route::Item(item_id) => Box::new(ItemDetailView::new(item_id)),
        Route::EditItem(item_id) => Box::new(ItemFormView::edit(item_id)),
        Route::ListProduct => Box::new(ItemFormView::create()),
        Route::Orders => Box::new(OrdersView::new()),
        Route::Listings | Route::Reviews => Box::new(PlaceholderView::new(route)),
        Route::SignIn => Box::new(SignInView::new()),
    }
}

/// Split the terminal into header, body and status bar
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Render the entire application UI
///
/// Rendering strategy:
/// - Header and status bar frame every page
/// - Views in the stack render bottom-up so floating views end up on top
/// - The profile dropdown renders last, above everything
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [header_area, body_area, status_area] = screen_layout(area);

    f.render_widget(Block::default().style(state.theme.panel_background()), area);
    header::render(state, header_area, f);

    for view in &state.view_stack {
        let view_area = if view.route().is_some() { body_area } else { area };
        view.render(state, view_area, f);
    }

    status_bar::render(state, status_area, f);
    header::render_dropdown(state, area, f);
}
