use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened => DetailState::Loading,
            DetailIntent::Loaded { recipe } => DetailState::Loaded { recipe },
            DetailIntent::LoadFailed { message } => DetailState::Failed { message },
        }
    }
}
