//! Home screen state

/// Prompt for opening an item by id
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub item_id_input: String,
    pub error: Option<String>,
}
