//! Application configuration.
//!
//! All values have defaults, so a missing config file is not an error.
//! Timing and threshold constants (debounce window, minimum query length,
//! splash duration) live here rather than at their call sites.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, DashboardConfig, LoginConfig, SearchConfig, SplashConfig};
