//! Marketplace API data transfer objects
//!
//! These types mirror the JSON returned by the marketplace server. Field names
//! follow the server's camelCase keys. The server is not entirely consistent
//! about number encoding (ids sometimes arrive as strings, prices as decimal
//! strings), so a few fields use lenient deserializers.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an item (product listing)
pub type ItemId = u64;

/// A logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient::id")]
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// An item listing with the seller's shop statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "lenient::id")]
    pub id: ItemId,

    /// Owner of the listing (only present on some endpoints)
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub seller_id: Option<u64>,

    pub name: String,

    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "imageURLs", default)]
    pub image_urls: Vec<String>,

    #[serde(default)]
    pub shop_name: String,

    #[serde(default)]
    pub shop_sales: u64,

    #[serde(default)]
    pub shop_reviews: u64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_shop_rating: f64,

    /// Number of reviews written for this item
    #[serde(default)]
    pub item_reviews: u64,
}

/// Author of a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default, deserialize_with = "lenient::opt_id")]
    pub id: Option<u64>,
    pub username: String,
}

/// A review of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub star_rating: u8,
    pub text: String,
    pub user: ReviewAuthor,
    #[serde(default)]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub seller_id: Option<u64>,
    /// Creation date as sent by the server (RFC 2822 or RFC 3339)
    #[serde(default)]
    pub date: Option<String>,
}

/// A single purchased line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Item id of the purchased product
    pub id: ItemId,
    pub quantity: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub purchase_price: f64,
    pub name: String,
    #[serde(rename = "previewImageURL", default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub shop_name: String,
}

impl OrderLine {
    /// Price of the whole line (unit price times quantity)
    pub fn line_total(&self) -> f64 {
        self.purchase_price * f64::from(self.quantity)
    }
}

/// An order placed by the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub order_date: String,
    pub total_items: u32,
    #[serde(deserialize_with = "lenient::number")]
    pub total_price: f64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// Body of an item edit (`PUT /items/:id`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemUpdate {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Body of a new listing (`POST /items/`)
///
/// `images_urls` is a `", "`-separated list; the first URL becomes the
/// preview image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub images_urls: String,
}

/// Body of an added image (`POST /items/:id/images`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItemImage {
    pub url: String,
    pub preview_image: bool,
}

/// An image attached to an item, as returned after adding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImage {
    #[serde(deserialize_with = "lenient::id")]
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub preview_image: bool,
}

/// Login credentials (`POST /session`)
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(u64),
        Float(f64),
        Text(String),
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Int(n) => Ok(n),
            NumberOrString::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(f as u64),
            NumberOrString::Float(f) => Err(serde::de::Error::custom(format!(
                "expected an integer id, got {f}"
            ))),
            NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }

    pub fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::Int(n)) => Ok(Some(n)),
            Some(NumberOrString::Float(f)) => Ok(Some(f as u64)),
            Some(NumberOrString::Text(s)) => Ok(s.trim().parse().ok()),
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Int(n) => Ok(n as f64),
            NumberOrString::Float(f) => Ok(f),
            NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_server_shape() {
        let json = r#"{
            "id": 7,
            "sellerId": "3",
            "name": "Vase",
            "shopName": "potter",
            "price": "12.50",
            "avgShopRating": 4.5,
            "shopSales": 12,
            "description": "Blue vase",
            "shopReviews": 4,
            "itemReviews": 2,
            "imageURLs": ["https://img/1.png", "https://img/2.png"]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.seller_id, Some(3));
        assert_eq!(item.price, 12.5);
        assert_eq!(item.image_urls.len(), 2);
        assert_eq!(item.shop_name, "potter");
    }

    #[test]
    fn test_item_deserialize_minimal() {
        let json = r#"{"id": 7, "name": "Vase", "price": 12.5, "description": "Blue vase"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.seller_id, None);
        assert!(item.image_urls.is_empty());
        assert_eq!(item.avg_shop_rating, 0.0);
    }

    #[test]
    fn test_review_deserialize() {
        let json = r#"{
            "id": 1,
            "user": {"id": 2, "username": "demo"},
            "sellerId": 3,
            "itemId": 7,
            "starRating": 5,
            "text": "Lovely",
            "date": "Tue, 01 Nov 2022 00:00:00 GMT"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.user.username, "demo");
        assert_eq!(review.star_rating, 5);
        assert_eq!(review.item_id, Some(7));
    }

    #[test]
    fn test_order_line_total() {
        let line = OrderLine {
            id: 1,
            quantity: 3,
            purchase_price: 2.5,
            name: "Mug".to_string(),
            preview_image_url: None,
            shop_name: "potter".to_string(),
        };
        assert_eq!(line.line_total(), 7.5);
    }

    #[test]
    fn test_item_image_wire_shape() {
        let body = serde_json::to_value(NewItemImage {
            url: "https://img/3.png".to_string(),
            preview_image: false,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"url": "https://img/3.png", "preview_image": false})
        );

        let json = r#"{"id": "12", "url": "https://img/3.png", "preview_image": true}"#;
        let image: ItemImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, 12);
        assert!(image.preview_image);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("demo@aa.io", "password");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("demo@aa.io"));
        assert!(!debug.contains("\"password\""));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let json = r#"{"id": "abc", "username": "demo"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
