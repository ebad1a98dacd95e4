//! Marketplace client trait
//!
//! This module defines the `MarketClient` trait that all client
//! implementations must satisfy.

use crate::error::ApiError;
use crate::types::{
    Credentials, Item, ItemId, ItemImage, ItemUpdate, NewItem, NewItemImage, Order, Review, User,
};
use async_trait::async_trait;

/// Result of a marketplace API call
pub type ApiResult<T> = Result<T, ApiError>;

/// Marketplace API client trait
///
/// One method per remote operation. Implementations can hit the HTTP API
/// directly or be replaced by in-memory fakes in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a single client can be
/// shared between async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use market_client::{MarketClient, Item};
///
/// async fn show(client: &dyn MarketClient) -> market_client::ApiResult<Item> {
///     client.fetch_item(7).await
/// }
/// ```
#[async_trait]
pub trait MarketClient: Send + Sync {
    /// Fetch a single item with its shop statistics (`GET /items/:id`)
    async fn fetch_item(&self, item_id: ItemId) -> ApiResult<Item>;

    /// Fetch all reviews of an item, oldest first (`GET /items/:id/reviews`)
    async fn fetch_item_reviews(&self, item_id: ItemId) -> ApiResult<Vec<Review>>;

    /// Update name, price and description of an item (`PUT /items/:id`)
    ///
    /// Returns the updated item, or `ApiError::Validation` if the server
    /// rejected the fields.
    async fn update_item(&self, item_id: ItemId, update: &ItemUpdate) -> ApiResult<Item>;

    /// Create a new listing owned by the logged-in user (`POST /items/`)
    async fn create_item(&self, item: &NewItem) -> ApiResult<Item>;

    /// Delete a listing owned by the logged-in user (`DELETE /items/:id`)
    async fn delete_item(&self, item_id: ItemId) -> ApiResult<()>;

    /// Attach another image to a listing (`POST /items/:id/images`)
    ///
    /// Returns the stored image, or `ApiError::Validation` if the server
    /// rejected the URL.
    async fn add_item_image(&self, item_id: ItemId, image: &NewItemImage) -> ApiResult<ItemImage>;

    /// Fetch the order history of the logged-in user (`GET /orders`)
    async fn fetch_orders(&self) -> ApiResult<Vec<Order>>;

    /// Start a session (`POST /session`)
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;

    /// End the current session (`DELETE /session`)
    async fn logout(&self) -> ApiResult<()>;
}
