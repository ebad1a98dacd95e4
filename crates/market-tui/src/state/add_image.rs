//! Add-image popup state
//!
//! Lives while the popup over an item page is open.

use super::FormStage;
use market_client::{ItemId, NewItemImage};

pub const IMAGE_URL_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AddImageState {
    pub item_id: ItemId,
    pub url: String,
    /// Make the new image the preview image of the listing
    pub preview_image: bool,
    pub errors: Vec<String>,
    pub stage: FormStage,
}

impl AddImageState {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            url: String::new(),
            preview_image: false,
            errors: Vec::new(),
            stage: FormStage::Editing,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.stage == FormStage::Submitting
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.url.chars().count() < IMAGE_URL_MAX_LEN {
            self.url.push(c);
        }
    }

    pub fn validate(&self) -> Result<NewItemImage, Vec<String>> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(vec!["Image URL is required".to_string()]);
        }
        Ok(NewItemImage {
            url: url.to_string(),
            preview_image: self.preview_image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_url() {
        let mut form = AddImageState::new(7);
        form.push_char(' ');
        assert_eq!(
            form.validate().unwrap_err(),
            vec!["Image URL is required".to_string()]
        );
    }

    #[test]
    fn test_validate_trims_url() {
        let form = AddImageState {
            url: " https://img/3.png ".to_string(),
            preview_image: true,
            ..AddImageState::new(7)
        };
        assert_eq!(
            form.validate().unwrap(),
            NewItemImage {
                url: "https://img/3.png".to_string(),
                preview_image: true,
            }
        );
    }
}
