//! Home screen actions

#[derive(Debug, Clone)]
pub enum HomeAction {
    /// Character typed into the item id prompt
    Char(char),
    Backspace,
    ClearInput,
    /// The prompt did not contain a valid item id
    Invalid(String),
}
