use crate::ui::mvi::UiState;

/// Shortest password the form will submit.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub mask_password: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            mask_password: true,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for LoginFormState {}

impl LoginFormState {
    /// Non-empty username and a long-enough password.
    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && self.password.chars().count() >= MIN_PASSWORD_LEN
    }

    /// Password as it should appear on screen.
    pub fn password_display(&self) -> String {
        if self.mask_password {
            "•".repeat(self.password.chars().count())
        } else {
            self.password.clone()
        }
    }
}
