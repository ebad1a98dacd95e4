//! reqwest-based marketplace client
//!
//! Direct implementation of the `MarketClient` trait over HTTP. The session
//! cookie set by `POST /session` is kept in reqwest's cookie store, so every
//! later request of the same client is authenticated.

use crate::client::{ApiResult, MarketClient};
use crate::error::ApiError;
use crate::types::{
    Credentials, Item, ItemId, ItemImage, ItemUpdate, NewItem, NewItemImage, Order, Review, User,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Marketplace client talking to the REST API
#[derive(Debug, Clone)]
pub struct HttpMarketClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpMarketClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:5000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// The API root all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn send_empty(request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }
}

#[async_trait]
impl MarketClient for HttpMarketClient {
    async fn fetch_item(&self, item_id: ItemId) -> ApiResult<Item> {
        let request = self.request(Method::GET, &format!("items/{item_id}"))?;
        Self::send_json(request).await
    }

    async fn fetch_item_reviews(&self, item_id: ItemId) -> ApiResult<Vec<Review>> {
        let request = self.request(Method::GET, &format!("items/{item_id}/reviews"))?;
        let body: ReviewsBody = Self::send_json(request).await?;
        let reviews = body.into_reviews();
        debug!("Fetched {} reviews for item {}", reviews.len(), item_id);
        Ok(reviews)
    }

    async fn update_item(&self, item_id: ItemId, update: &ItemUpdate) -> ApiResult<Item> {
        let request = self
            .request(Method::PUT, &format!("items/{item_id}"))?
            .json(update);
        Self::send_json(request).await
    }

    async fn create_item(&self, item: &NewItem) -> ApiResult<Item> {
        let request = self.request(Method::POST, "items/")?.json(item);
        Self::send_json(request).await
    }

    async fn delete_item(&self, item_id: ItemId) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("items/{item_id}"))?;
        Self::send_empty(request).await
    }

    async fn add_item_image(&self, item_id: ItemId, image: &NewItemImage) -> ApiResult<ItemImage> {
        let request = self
            .request(Method::POST, &format!("items/{item_id}/images"))?
            .json(image);
        Self::send_json(request).await
    }

    async fn fetch_orders(&self) -> ApiResult<Vec<Order>> {
        let request = self.request(Method::GET, "orders")?;
        let body: OrdersBody = Self::send_json(request).await?;
        Ok(body.into_orders())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        let request = self.request(Method::POST, "session")?.json(credentials);
        let body: SessionBody = Self::send_json(request).await?;
        Ok(body.into_user())
    }

    async fn logout(&self) -> ApiResult<()> {
        let request = self.request(Method::DELETE, "session")?;
        Self::send_empty(request).await
    }
}

/// Make sure the base URL ends with a slash so `Url::join` appends instead of
/// replacing the last path segment
fn normalize_base_url(base_url: &str) -> ApiResult<Url> {
    let mut url = Url::parse(base_url.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewsBody {
    Wrapped {
        #[serde(rename = "itemReviews")]
        item_reviews: Vec<Review>,
    },
    Bare(Vec<Review>),
}

impl ReviewsBody {
    fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewsBody::Wrapped { item_reviews } => item_reviews,
            ReviewsBody::Bare(reviews) => reviews,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrdersBody {
    Wrapped { orders: Vec<Order> },
    Bare(Vec<Order>),
}

impl OrdersBody {
    fn into_orders(self) -> Vec<Order> {
        match self {
            OrdersBody::Wrapped { orders } => orders,
            OrdersBody::Bare(orders) => orders,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionBody {
    Wrapped { user: User },
    Bare(User),
}

impl SessionBody {
    fn into_user(self) -> User {
        match self {
            SessionBody::Wrapped { user } => user,
            SessionBody::Bare(user) => user,
        }
    }
}
