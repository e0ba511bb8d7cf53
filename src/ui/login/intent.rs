use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    TypeChar(char),
    Backspace,
    /// Move focus between the username and password fields.
    SwitchField,
    /// Show/hide the password.
    ToggleMask,
    /// The form was submitted; a login request is on the wire.
    SubmitStarted,
    Succeeded,
    Failed { message: String },
}

impl Intent for LoginIntent {}
