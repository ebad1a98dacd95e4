//! Application State

use std::sync::Arc;

use market_client::{Item, Order, Review};
use ratatui::layout::Rect;

use crate::route::Route;
use crate::views::{self, View};

use super::{
    AddImageState, HomeState, ItemFormState, OrdersPageState, ProfileMenuState, Resource, SessionState,
    SignInFormState, StatusBarState,
};

/// Application state
///
/// The four store sub-trees (`session`, `item_page`, `item_reviews`, `orders`)
/// sit behind `Arc`s: a reducer that does not recognize an action hands back
/// the same pointer, so "unchanged" is observable with `Arc::ptr_eq`.
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the current page, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,

    pub session: Arc<SessionState>,
    pub item_page: Arc<Resource<Item>>,
    pub item_reviews: Arc<Resource<Vec<Review>>>,
    pub orders: Arc<Resource<Vec<Order>>>,

    pub home: HomeState,
    /// Present while an item form (edit or create) is open
    pub item_form: Option<ItemFormState>,
    /// Present while the add-image popup is open
    pub add_image: Option<AddImageState>,
    pub orders_page: OrdersPageState,
    pub sign_in: SignInFormState,
    pub profile_menu: ProfileMenuState,
    pub status_bar: StatusBarState,
    /// Vertical scroll offset of the current page
    pub scroll: u16,
    /// Last known terminal size
    pub viewport: Rect,

    pub theme: market_theme::Theme,
    pub app_config: market_config::AppConfig,
}

impl AppState {
    pub fn new(app_config: market_config::AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// Route of the page at the bottom of the view stack
    pub fn active_route(&self) -> Route {
        self.view_stack
            .iter()
            .rev()
            .find_map(|v| v.route())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("session", &self.session)
            .field("item_page", &self.item_page.status)
            .field("item_reviews", &self.item_reviews.status)
            .field("orders", &self.orders.status)
            .field("home", &self.home)
            .field("item_form", &self.item_form)
            .field("add_image", &self.add_image)
            .field("orders_page", &self.orders_page)
            .field("sign_in", &self.sign_in)
            .field("profile_menu", &self.profile_menu)
            .field("status_bar", &self.status_bar)
            .field("scroll", &self.scroll)
            .field("viewport", &self.viewport)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            session: Arc::clone(&self.session),
            item_page: Arc::clone(&self.item_page),
            item_reviews: Arc::clone(&self.item_reviews),
            orders: Arc::clone(&self.orders),
            home: self.home.clone(),
            item_form: self.item_form.clone(),
            add_image: self.add_image.clone(),
            orders_page: self.orders_page,
            sign_in: self.sign_in.clone(),
            profile_menu: self.profile_menu.clone(),
            status_bar: self.status_bar.clone(),
            scroll: self.scroll,
            viewport: self.viewport,
            theme: self.theme.clone(),
            app_config: self.app_config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![views::view_for(Route::Home)],
            session: Arc::default(),
            item_page: Arc::default(),
            item_reviews: Arc::default(),
            orders: Arc::default(),
            home: HomeState::default(),
            item_form: None,
            add_image: None,
            orders_page: OrdersPageState::default(),
            sign_in: SignInFormState::default(),
            profile_menu: ProfileMenuState::default(),
            status_bar: StatusBarState::default(),
            scroll: 0,
            viewport: Rect::default(),
            theme: market_theme::Theme::default(),
            app_config: market_config::AppConfig::default(),
        }
    }
}
