use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::QueryAccepted { query } => SearchState::Debouncing { query },
            SearchIntent::QueryRejected | SearchIntent::Cleared => SearchState::Idle,
            SearchIntent::Launched { query, generation } => {
                SearchState::InFlight { query, generation }
            }
            SearchIntent::Resolved {
                generation,
                results,
            } => match state {
                SearchState::InFlight {
                    query,
                    generation: current,
                } if current == generation => SearchState::Succeeded { query, results },
                // Superseded request: the state has moved on, drop it.
                other => other,
            },
            SearchIntent::ResolveFailed { generation, error } => match state {
                SearchState::InFlight {
                    query,
                    generation: current,
                } if current == generation => SearchState::Failed { query, error },
                other => other,
            },
        }
    }
}
