use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginFormState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::TypeChar(c) => {
                // Editing is frozen while a request is on the wire.
                if state.submitting {
                    return state;
                }
                match state.focus {
                    LoginField::Username => state.username.push(c),
                    LoginField::Password => state.password.push(c),
                }
                state.error = None;
                state
            }
            LoginIntent::Backspace => {
                if state.submitting {
                    return state;
                }
                match state.focus {
                    LoginField::Username => {
                        state.username.pop();
                    }
                    LoginField::Password => {
                        state.password.pop();
                    }
                }
                state.error = None;
                state
            }
            LoginIntent::SwitchField => {
                state.focus = match state.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
                state
            }
            LoginIntent::ToggleMask => {
                state.mask_password = !state.mask_password;
                state
            }
            LoginIntent::SubmitStarted => {
                state.submitting = true;
                state.error = None;
                state
            }
            // The app navigates away; hand back a clean form for next time.
            LoginIntent::Succeeded => LoginFormState::default(),
            LoginIntent::Failed { message } => {
                state.submitting = false;
                state.error = Some(message);
                state
            }
        }
    }
}
