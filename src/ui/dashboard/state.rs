use crate::api::Recipe;
use crate::ui::mvi::UiState;

/// Everything the dashboard's idle content region needs, produced by one
/// successful aggregate load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub featured: Vec<Recipe>,
    pub tags: Vec<String>,
    pub popular: Vec<Recipe>,
}

/// All-or-nothing: there is no partial-success shape by design — a failed
/// aggregate load discards whatever did arrive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardLoadState {
    #[default]
    Loading,
    Loaded { data: DashboardData },
    Failed { message: String },
}

impl UiState for DashboardLoadState {}

impl DashboardLoadState {
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            Self::Loaded { data } => Some(data),
            _ => None,
        }
    }

    pub fn popular(&self) -> Option<&[Recipe]> {
        self.data().map(|data| data.popular.as_slice())
    }
}
