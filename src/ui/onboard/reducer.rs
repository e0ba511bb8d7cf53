use crate::ui::mvi::Reducer;
use crate::ui::onboard::intent::OnboardIntent;
use crate::ui::onboard::state::{OnboardState, SLIDES};

pub struct OnboardReducer;

impl Reducer for OnboardReducer {
    type State = OnboardState;
    type Intent = OnboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OnboardIntent::Next => OnboardState {
                slide: (state.slide + 1).min(SLIDES.len() - 1),
            },
            OnboardIntent::Back => OnboardState {
                slide: state.slide.saturating_sub(1),
            },
        }
    }
}
