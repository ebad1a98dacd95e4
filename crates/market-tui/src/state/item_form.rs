//! Item Form State
//!
//! Backs both the edit form (`/items/:id/edit`) and the new listing form
//! (`/list-product`). The fields are plain strings owned by the form; they are
//! seeded once when the form opens and never re-read from the store.

use market_client::{ItemId, ItemUpdate, NewItem};

pub const NAME_MAX_LEN: usize = 75;
pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const IMAGE_URLS_MAX_LEN: usize = 2000;
pub const PRICE_MAX_LEN: usize = 12;
pub const PRICE_MIN: f64 = 0.01;

/// Form field of the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFormField {
    #[default]
    Name,
    Price,
    Description,
    ImageUrls,
}

impl ItemFormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::Price => "Price",
            Self::Description => "Description",
            Self::ImageUrls => "Image URLs",
        }
    }

    /// Maximum number of characters the input accepts
    pub fn max_len(self) -> usize {
        match self {
            Self::Name => NAME_MAX_LEN,
            Self::Price => PRICE_MAX_LEN,
            Self::Description => DESCRIPTION_MAX_LEN,
            Self::ImageUrls => IMAGE_URLS_MAX_LEN,
        }
    }
}

/// What submitting the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormMode {
    Edit(ItemId),
    Create,
}

/// Submit lifecycle shared by all forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStage {
    #[default]
    Editing,
    Submitting,
}

/// Field values that passed the local checks
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_urls: Vec<String>,
}

impl ValidatedItem {
    pub fn to_update(&self) -> ItemUpdate {
        ItemUpdate {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }

    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            images_urls: self.image_urls.join(", "),
        }
    }
}

/// State of the item form
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFormState {
    pub mode: ItemFormMode,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_urls: String,
    pub focused_field: ItemFormField,
    pub errors: Vec<String>,
    pub stage: FormStage,
}

impl ItemFormState {
    /// Edit form seeded from the item as it was when the form was opened
    pub fn edit(item_id: ItemId, seed: &ItemUpdate) -> Self {
        Self {
            mode: ItemFormMode::Edit(item_id),
            name: seed.name.clone(),
            price: seed.price.to_string(),
            description: seed.description.clone(),
            image_urls: String::new(),
            focused_field: ItemFormField::default(),
            errors: Vec::new(),
            stage: FormStage::Editing,
        }
    }

    /// Empty form for a new listing
    pub fn create() -> Self {
        Self {
            mode: ItemFormMode::Create,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            image_urls: String::new(),
            focused_field: ItemFormField::default(),
            errors: Vec::new(),
            stage: FormStage::Editing,
        }
    }

    /// Fields shown for the current mode, in tab order
    pub fn fields(&self) -> &'static [ItemFormField] {
        match self.mode {
            ItemFormMode::Edit(_) => &[
                ItemFormField::Name,
                ItemFormField::Price,
                ItemFormField::Description,
            ],
            ItemFormMode::Create => &[
                ItemFormField::Name,
                ItemFormField::Price,
                ItemFormField::Description,
                ItemFormField::ImageUrls,
            ],
        }
    }

    pub fn value(&self, field: ItemFormField) -> &str {
        match field {
            ItemFormField::Name => &self.name,
            ItemFormField::Price => &self.price,
            ItemFormField::Description => &self.description,
            ItemFormField::ImageUrls => &self.image_urls,
        }
    }

    fn value_mut(&mut self, field: ItemFormField) -> &mut String {
        match field {
            ItemFormField::Name => &mut self.name,
            ItemFormField::Price => &mut self.price,
            ItemFormField::Description => &mut self.description,
            ItemFormField::ImageUrls => &mut self.image_urls,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.stage == FormStage::Submitting
    }

    /// Type a character into the focused field
    ///
    /// Like the input widgets of the web form, the field refuses input past
    /// its maximum length, and the price field only takes digits and one dot.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field;
        if c.is_control() {
            return;
        }
        if field == ItemFormField::Price && !(c.is_ascii_digit() || (c == '.' && !self.price.contains('.'))) {
            return;
        }
        let value = self.value_mut(field);
        if value.chars().count() < field.max_len() {
            value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        let field = self.focused_field;
        self.value_mut(field).pop();
    }

    pub fn clear_field(&mut self) {
        let field = self.focused_field;
        self.value_mut(field).clear();
    }

    pub fn focus_next(&mut self) {
        self.focused_field = cycle(self.fields(), self.focused_field, 1);
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        self.focused_field = cycle(fields, self.focused_field, fields.len() - 1);
    }

    /// Run the local constraint checks
    pub fn validate(&self) -> Result<ValidatedItem, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Name is required".to_string());
        } else if name.chars().count() > NAME_MAX_LEN {
            errors.push(format!("Name must be at most {NAME_MAX_LEN} characters"));
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if !price.is_finite() => {
                errors.push("Price must be a number".to_string());
                0.0
            }
            Ok(price) if price < PRICE_MIN => {
                errors.push(format!("Price must be at least {PRICE_MIN:.2}"));
                price
            }
            Ok(price) => {
                if decimals(self.price.trim()) > 2 {
                    errors.push("Price can have at most two decimal places".to_string());
                }
                price
            }
            Err(_) => {
                errors.push("Price must be a number".to_string());
                0.0
            }
        };

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("Description is required".to_string());
        } else if description.chars().count() > DESCRIPTION_MAX_LEN {
            errors.push(format!(
                "Description must be at most {DESCRIPTION_MAX_LEN} characters"
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let image_urls = self
            .image_urls
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();

        Ok(ValidatedItem {
            name: name.to_string(),
            price,
            description: description.to_string(),
            image_urls,
        })
    }
}

fn cycle(fields: &[ItemFormField], current: ItemFormField, step: usize) -> ItemFormField {
    let idx = fields.iter().position(|f| *f == current).unwrap_or(0);
    fields[(idx + step) % fields.len()]
}

fn decimals(price: &str) -> usize {
    price.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}
