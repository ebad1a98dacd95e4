//! View models
//!
//! Pre-computed display data, so views only lay out and style.

pub mod item_detail;
pub mod orders;
pub mod profile_menu;

pub use item_detail::{ItemDetailViewModel, ReviewLine};
pub use orders::{OrderLineRow, OrderRow, OrdersViewModel};
pub use profile_menu::ProfileMenuViewModel;

/// `$12.50`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Five star glyphs, filled up to `rating` (rounded, clamped to 0..=5)
pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
