//! Dashboard content: the one-shot aggregate load of featured recipes,
//! tags, and popular recipes, and its load-state machine.

mod intent;
mod loader;
mod reducer;
mod state;
pub mod view;

pub use intent::DashboardIntent;
pub use loader::{load, spawn_load};
pub use reducer::DashboardReducer;
pub use state::{DashboardData, DashboardLoadState};
