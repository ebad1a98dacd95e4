//! Client-side routes
//!
//! Routes keep the path names of the web client so links and CLI arguments
//! stay familiar (`/items/7`, `/your-orders`, ...).

use market_client::ItemId;
use std::fmt;

/// A navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Item(ItemId),
    EditItem(ItemId),
    Orders,
    Listings,
    Reviews,
    ListProduct,
    SignIn,
}

impl Route {
    /// Parse a path like `/items/7` or `/your-orders`
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["items", id] => id.parse().ok().map(Route::Item),
            ["items", id, "edit"] => id.parse().ok().map(Route::EditItem),
            ["your-orders"] => Some(Route::Orders),
            ["your-listings"] => Some(Route::Listings),
            ["your-reviews"] => Some(Route::Reviews),
            ["list-product"] => Some(Route::ListProduct),
            ["sign-in"] => Some(Route::SignIn),
            _ => None,
        }
    }

    /// Routes that redirect home when there is no session
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Orders | Route::Listings | Route::Reviews | Route::ListProduct | Route::EditItem(_)
        )
    }

    /// Short human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Item(_) => "Item",
            Route::EditItem(_) => "Edit Your Item",
            Route::Orders => "Your orders",
            Route::Listings => "Your listings",
            Route::Reviews => "Your reviews",
            Route::ListProduct => "List a product",
            Route::SignIn => "Sign in",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Item(id) => write!(f, "/items/{id}"),
            Route::EditItem(id) => write!(f, "/items/{id}/edit"),
            Route::Orders => write!(f, "/your-orders"),
            Route::Listings => write!(f, "/your-listings"),
            Route::Reviews => write!(f, "/your-reviews"),
            Route::ListProduct => write!(f, "/list-product"),
            Route::SignIn => write!(f, "/sign-in"),
        }
    }
}
