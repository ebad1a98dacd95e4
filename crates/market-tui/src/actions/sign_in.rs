//! Sign-in form actions

use super::ThunkResult;

#[derive(Debug, Clone)]
pub enum SignInAction {
    Char(char),
    Backspace,
    ClearField,
    NextField,
    PrevField,
    Submit,
    Submitting,
    Rejected(Vec<String>),
    Settled(ThunkResult<()>),
    Cancel,
}
