//! The dashboard's fan-out/fan-in aggregate load is all-or-nothing.

mod common;

use common::{decode_error, recipe, MockRecipeService};
use savor::config::DashboardConfig;
use savor::ui::dashboard::{load, DashboardIntent, DashboardLoadState, DashboardReducer};
use savor::ui::mvi::Reducer;

fn cfg() -> DashboardConfig {
    DashboardConfig {
        featured_limit: 10,
        popular_limit: 10,
        tag_row_limit: 12,
    }
}

#[tokio::test]
async fn all_three_succeeding_yields_loaded_data() {
    let mock = MockRecipeService::new();
    mock.set_featured(Ok(vec![recipe(1, "Margherita")]));
    mock.set_tags(Ok(vec!["Pizza".to_string()]));
    mock.set_popular(Ok(vec![recipe(2, "Butter Chicken")]));

    let data = load(&mock, &cfg()).await.expect("aggregate load");
    assert_eq!(data.featured.len(), 1);
    assert_eq!(data.tags, vec!["Pizza".to_string()]);
    assert_eq!(data.popular[0].name, "Butter Chicken");

    // All three calls went out, with the configured limits.
    let calls = mock.calls();
    assert!(calls.contains(&"featured:10".to_string()));
    assert!(calls.contains(&"tags".to_string()));
    assert!(calls.contains(&"popular:10".to_string()));
}

#[tokio::test]
async fn one_failing_call_fails_the_whole_aggregate() {
    let mock = MockRecipeService::new();
    mock.set_featured(Ok(vec![recipe(1, "Margherita")]));
    mock.set_tags(Ok(vec!["Pizza".to_string()]));
    mock.set_popular(Err(decode_error()));

    let result = load(&mock, &cfg()).await;
    let err = result.expect_err("aggregate must fail");

    // The successful featured/tags results are discarded: feeding the
    // failure through the reducer leaves no partial data to render.
    let state = DashboardReducer::reduce(
        DashboardLoadState::Loading,
        DashboardIntent::LoadFailed {
            message: err.user_message(),
        },
    );
    assert!(state.data().is_none());
    assert!(matches!(state, DashboardLoadState::Failed { .. }));

    // All three requests were still issued (fan-out, no short-circuit).
    assert_eq!(mock.calls().len(), 3);
}

#[tokio::test]
async fn failure_reports_a_single_message() {
    let mock = MockRecipeService::new();
    mock.set_featured(Err(decode_error()));
    mock.set_tags(Err(decode_error()));
    mock.set_popular(Err(decode_error()));

    let err = load(&mock, &cfg()).await.expect_err("aggregate must fail");
    // One error surfaces, not three.
    assert!(!err.user_message().is_empty());
}
