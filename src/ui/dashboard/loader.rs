use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::{ApiError, RecipeService};
use crate::config::DashboardConfig;
use crate::ui::dashboard::state::DashboardData;
use crate::ui::events::AppEvent;

/// One-shot fan-out/fan-in: featured + tags + popular issued concurrently.
///
/// The aggregate succeeds only if all three succeed; the first failure (in
/// featured, tags, popular order) becomes the single reported error and
/// the other results are discarded. No retry.
pub async fn load(
    service: &dyn RecipeService,
    cfg: &DashboardConfig,
) -> Result<DashboardData, ApiError> {
    let (featured, tags, popular) = tokio::join!(
        service.fetch_featured(cfg.featured_limit),
        service.fetch_tags(),
        service.fetch_popular(cfg.popular_limit),
    );

    Ok(DashboardData {
        featured: featured?,
        tags: tags?,
        popular: popular?,
    })
}

/// Run [`load`] on a background task and deliver the outcome as an
/// [`AppEvent::DashboardLoaded`].
pub fn spawn_load(
    service: Arc<dyn RecipeService>,
    cfg: DashboardConfig,
    events: UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = load(service.as_ref(), &cfg).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "dashboard load failed");
        }
        let _ = events.send(AppEvent::DashboardLoaded { result });
    });
}
