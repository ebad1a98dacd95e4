//! View model for the item detail page

use super::{format_price, stars};
use crate::state::{AppState, FetchStatus};
use market_client::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewLine {
    pub stars: String,
    pub author: String,
    pub text: String,
    pub date: Option<String>,
}

/// What the item page shows
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDetailViewModel {
    Loading,
    Failed(String),
    Loaded {
        name: String,
        price: String,
        shop_name: String,
        shop_stats: String,
        description: String,
        image_urls: Vec<String>,
        /// `None` while reviews are loading
        reviews: Option<Vec<ReviewLine>>,
        reviews_error: Option<String>,
        /// The logged-in user listed this item
        is_owner: bool,
    },
}

impl ItemDetailViewModel {
    /// Build the view model for item `item_id`
    ///
    /// The item sub-tree may still hold another item (before the new fetch
    /// started); that counts as loading.
    pub fn from_state(state: &AppState, item_id: ItemId) -> Self {
        let item = match &state.item_page.status {
            FetchStatus::Loaded(item) if item.id == item_id => item,
            FetchStatus::Errored(message) => return Self::Failed(message.clone()),
            _ => return Self::Loading,
        };

        let (reviews, reviews_error) = match &state.item_reviews.status {
            FetchStatus::Loaded(reviews) => (
                Some(
                    reviews
                        .iter()
                        .map(|review| ReviewLine {
                            stars: stars(f64::from(review.star_rating)),
                            author: review.user.username.clone(),
                            text: review.text.clone(),
                            date: review.date.as_deref().map(super::orders::format_date),
                        })
                        .collect(),
                ),
                None,
            ),
            FetchStatus::Errored(message) => (Some(Vec::new()), Some(message.clone())),
            _ => (None, None),
        };

        let is_owner = match (&state.session.user, item.seller_id) {
            (Some(user), Some(seller_id)) => user.id == seller_id,
            _ => false,
        };

        Self::Loaded {
            name: item.name.clone(),
            price: format_price(item.price),
            shop_name: item.shop_name.clone(),
            shop_stats: format!(
                "{} sales · {} {:.1} ({} reviews)",
                item.shop_sales,
                stars(item.avg_shop_rating),
                item.avg_shop_rating,
                item.shop_reviews
            ),
            description: item.description.clone(),
            image_urls: item.image_urls.clone(),
            reviews,
            reviews_error,
            is_owner,
        }
    }
}
