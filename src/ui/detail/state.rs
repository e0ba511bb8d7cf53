use crate::api::RecipeDetail;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded { recipe: RecipeDetail },
    Failed { message: String },
}

impl UiState for DetailState {}
