use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardLoadState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardLoadState;
    type Intent = DashboardIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Reload => DashboardLoadState::Loading,
            DashboardIntent::Loaded { data } => DashboardLoadState::Loaded { data },
            DashboardIntent::LoadFailed { message } => DashboardLoadState::Failed { message },
        }
    }
}
