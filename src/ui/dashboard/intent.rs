use crate::ui::mvi::Intent;
use crate::ui::dashboard::state::DashboardData;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// A (re)load was kicked off.
    Reload,
    Loaded { data: DashboardData },
    LoadFailed { message: String },
}

impl Intent for DashboardIntent {}
