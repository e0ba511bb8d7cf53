use crate::api::RecipeDetail;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A detail view was opened; a fetch is underway.
    Opened,
    Loaded { recipe: RecipeDetail },
    LoadFailed { message: String },
}

impl Intent for DetailIntent {}
