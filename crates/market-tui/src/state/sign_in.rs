//! Sign-in form state

use super::FormStage;
use market_client::Credentials;

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    #[default]
    Email,
    Password,
}

impl SignInField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

/// Email and password typed on `/sign-in`
#[derive(Clone, Default, PartialEq)]
pub struct SignInFormState {
    pub email: String,
    pub password: String,
    pub focused_field: SignInField,
    pub errors: Vec<String>,
    pub stage: FormStage,
}

impl SignInFormState {
    pub fn is_submitting(&self) -> bool {
        self.stage == FormStage::Submitting
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let (value, max) = match self.focused_field {
            SignInField::Email => (&mut self.email, EMAIL_MAX_LEN),
            SignInField::Password => (&mut self.password, PASSWORD_MAX_LEN),
        };
        if value.chars().count() < max {
            value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        match self.focused_field {
            SignInField::Email => self.email.pop(),
            SignInField::Password => self.password.pop(),
        };
    }

    pub fn clear_field(&mut self) {
        match self.focused_field {
            SignInField::Email => self.email.clear(),
            SignInField::Password => self.password.clear(),
        }
    }

    pub fn focus_other(&mut self) {
        self.focused_field = self.focused_field.other();
    }

    /// Password as shown on screen
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    pub fn validate(&self) -> Result<Credentials, Vec<String>> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        }
        if self.password.is_empty() {
            errors.push("Password is required".to_string());
        }
        if errors.is_empty() {
            Ok(Credentials::new(email, self.password.clone()))
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for SignInFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInFormState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("focused_field", &self.focused_field)
            .field("errors", &self.errors)
            .field("stage", &self.stage)
            .finish()
    }
}
