//! Home Reducer
//!
//! The item id prompt only takes digits.

use crate::actions::HomeAction;
use crate::state::HomeState;

const ITEM_ID_MAX_LEN: usize = 19;

pub fn reduce_home(mut state: HomeState, action: &HomeAction) -> HomeState {
    match action {
        HomeAction::Char(c) => {
            if c.is_ascii_digit() && state.item_id_input.len() < ITEM_ID_MAX_LEN {
                state.item_id_input.push(*c);
                state.error = None;
            }
        }
        HomeAction::Backspace => {
            state.item_id_input.pop();
            state.error = None;
        }
        HomeAction::ClearInput => {
            state.item_id_input.clear();
            state.error = None;
        }
        HomeAction::Invalid(message) => {
            state.error = Some(message.clone());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_are_accepted() {
        let mut state = HomeState::default();
        for c in "4x2".chars() {
            state = reduce_home(state, &HomeAction::Char(c));
        }
        assert_eq!(state.item_id_input, "42");
    }

    #[test]
    fn test_typing_clears_error() {
        let state = reduce_home(
            HomeState::default(),
            &HomeAction::Invalid("Enter an item id".to_string()),
        );
        assert!(state.error.is_some());
        let state = reduce_home(state, &HomeAction::Char('1'));
        assert!(state.error.is_none());
    }
}
