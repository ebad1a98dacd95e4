//! Marketplace REST API client
//!
//! This crate provides a trait-based client for the marketplace server.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              MarketClient trait                  │
//! │  - fetch_item() / fetch_item_reviews()           │
//! │  - update_item() / create_item() / delete_item() │
//! │  - add_item_image()                              │
//! │  - fetch_orders()                                │
//! │  - login() / logout()                            │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ HttpMarketClient│
//!              │ (reqwest)       │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use market_client::{HttpMarketClient, MarketClient};
//! use std::time::Duration;
//!
//! # async fn example() -> market_client::ApiResult<()> {
//! let client = HttpMarketClient::new("http://localhost:5000/api", Duration::from_secs(10))?;
//! let item = client.fetch_item(7).await?;
//! println!("{} costs ${:.2}", item.name, item.price);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiResult, MarketClient};
pub use error::ApiError;
pub use http_client::HttpMarketClient;
pub use types::{
    Credentials, Item, ItemId, ItemImage, ItemUpdate, NewItem, NewItemImage, Order, OrderLine,
    Review, ReviewAuthor, User,
};
