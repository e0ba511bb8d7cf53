use crate::api::Recipe;
use crate::ui::mvi::UiState;

/// Lifecycle of the dashboard search box. Exactly one value is live at a
/// time; the dashboard's featured/popular/tags content renders only while
/// this is `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    /// Input accepted, waiting out the quiet window before issuing a
    /// request.
    Debouncing { query: String },
    /// A request is on the wire. `generation` identifies the one completion
    /// that is allowed to settle this state.
    InFlight { query: String, generation: u64 },
    Succeeded { query: String, results: Vec<Recipe> },
    Failed { query: String, error: String },
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while a timer or request is pending.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Debouncing { .. } | Self::InFlight { .. })
    }

    pub fn results(&self) -> Option<&[Recipe]> {
        match self {
            Self::Succeeded { results, .. } => Some(results),
            _ => None,
        }
    }
}
