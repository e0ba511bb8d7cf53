//! Client for the external recipe service.
//!
//! Every operation maps 1:1 to one outbound HTTP request: no retries, no
//! caching, no shared mutation. The [`RecipeService`] trait is the seam the
//! UI layer depends on, so tests can substitute a scripted implementation.

mod client;
mod error;
mod types;

pub use client::{HttpRecipeClient, RecipeService};
pub use error::ApiError;
pub use types::{LoginSession, Recipe, RecipeDetail};
