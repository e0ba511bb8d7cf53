//! Timing and cancellation behavior of the search coordinator, driven
//! under a paused clock with a scripted recipe service.

mod common;

use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::{advance, Duration};

use common::{recipe, settle, MockRecipeService};
use savor::api::RecipeService;
use savor::config::SearchConfig;
use savor::ui::events::AppEvent;
use savor::ui::search::{SearchCoordinator, SearchState};

const DEBOUNCE_MS: u64 = 300;

fn make_coordinator(
    mock: &Arc<MockRecipeService>,
) -> (SearchCoordinator, UnboundedReceiver<AppEvent>) {
    let (tx, rx) = unbounded_channel();
    let cfg = SearchConfig {
        debounce_ms: DEBOUNCE_MS,
        min_query_len: 2,
    };
    let service: Arc<dyn RecipeService> = Arc::clone(mock) as Arc<dyn RecipeService>;
    (SearchCoordinator::new(cfg, service, tx), rx)
}

/// Deliver every pending timer/completion event back into the
/// coordinator, the way the UI loop does.
async fn pump(coordinator: &mut SearchCoordinator, rx: &mut UnboundedReceiver<AppEvent>) {
    loop {
        settle().await;
        match rx.try_recv() {
            Ok(AppEvent::SearchDebounce { epoch }) => coordinator.on_debounce_elapsed(epoch),
            Ok(AppEvent::SearchResolved { generation, result }) => {
                coordinator.on_resolved(generation, result)
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }
}

async fn type_text(
    coordinator: &mut SearchCoordinator,
    rx: &mut UnboundedReceiver<AppEvent>,
    text: &str,
    gap_ms: u64,
) {
    for c in text.chars() {
        coordinator.on_input_char(c);
        pump(coordinator, rx).await;
        if gap_ms > 0 {
            advance(Duration::from_millis(gap_ms)).await;
            pump(coordinator, rx).await;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn fast_typing_issues_exactly_one_request() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    // "p", "pa", "pas", "past", "pasta" at 50ms intervals.
    type_text(&mut coordinator, &mut rx, "pasta", 50).await;
    assert!(matches!(
        coordinator.state(),
        SearchState::Debouncing { query } if query == "pasta"
    ));

    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    assert_eq!(mock.search_calls(), vec!["search:pasta"]);
    assert!(matches!(coordinator.state(), SearchState::Succeeded { query, .. } if query == "pasta"));
}

#[tokio::test(start_paused = true)]
async fn single_character_never_issues_a_request() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    coordinator.on_input_char('p');
    assert!(coordinator.state().is_idle());

    advance(Duration::from_millis(DEBOUNCE_MS * 3)).await;
    pump(&mut coordinator, &mut rx).await;

    assert!(mock.search_calls().is_empty());
    assert!(coordinator.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn two_characters_issue_a_request_after_the_window() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    coordinator.on_input_char('p');
    coordinator.on_input_char('a');
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    assert_eq!(mock.search_calls(), vec!["search:pa"]);
}

#[tokio::test(start_paused = true)]
async fn empty_or_whitespace_input_stays_idle() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    for c in "   ".chars() {
        coordinator.on_input_char(c);
        assert!(coordinator.state().is_idle());
    }

    // Deleting back to empty from an accepted query also lands in Idle.
    coordinator.on_input_char('p');
    coordinator.on_input_char('a');
    assert!(matches!(coordinator.state(), SearchState::Debouncing { .. }));
    coordinator.on_backspace();
    coordinator.on_backspace();
    coordinator.on_backspace();
    assert!(coordinator.state().is_idle());

    advance(Duration::from_millis(DEBOUNCE_MS * 2)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(mock.search_calls().is_empty());
    assert!(coordinator.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn query_is_trimmed_before_sending() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    for c in " pasta ".chars() {
        coordinator.on_input_char(c);
    }
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    assert_eq!(mock.search_calls(), vec!["search:pasta"]);
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_never_overwrites_a_newer_one() {
    let mock = Arc::new(MockRecipeService::new());
    // First request is slow, second is fast.
    mock.push_search(500, Ok(vec![recipe(1, "Old Pasta")]));
    mock.push_search(10, Ok(vec![recipe(2, "Fresh Pasta")]));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    type_text(&mut coordinator, &mut rx, "pasta", 0).await;
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(
        coordinator.state(),
        SearchState::InFlight { generation: 1, .. }
    ));

    // Keystroke while generation 1 is on the wire supersedes it.
    coordinator.on_input_char('s');
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    // Generation 2 resolves first.
    advance(Duration::from_millis(10)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(
        coordinator.state(),
        SearchState::Succeeded { query, results }
            if query == "pastas" && results[0].name == "Fresh Pasta"
    ));

    // Generation 1 finally resolves and must be dropped.
    advance(Duration::from_millis(500)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(
        coordinator.state(),
        SearchState::Succeeded { query, results }
            if query == "pastas" && results.len() == 1 && results[0].name == "Fresh Pasta"
    ));

    assert_eq!(mock.search_calls(), vec!["search:pasta", "search:pastas"]);
}

#[tokio::test(start_paused = true)]
async fn stale_failure_is_dropped_too() {
    let mock = Arc::new(MockRecipeService::new());
    mock.push_search(500, Err(common::decode_error()));
    mock.push_search(10, Ok(vec![recipe(2, "Fresh")]));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    type_text(&mut coordinator, &mut rx, "dal", 0).await;
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    coordinator.on_input_char('s');
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;
    advance(Duration::from_millis(10)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(coordinator.state(), SearchState::Succeeded { .. }));

    advance(Duration::from_millis(500)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(coordinator.state(), SearchState::Succeeded { .. }));
}

#[tokio::test(start_paused = true)]
async fn clear_cancels_the_pending_timer() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    coordinator.on_input_char('p');
    coordinator.on_input_char('a');
    coordinator.clear();
    assert!(coordinator.state().is_idle());
    assert!(coordinator.input().is_empty());

    advance(Duration::from_millis(DEBOUNCE_MS * 2)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(mock.search_calls().is_empty());
    assert!(coordinator.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn clear_orphans_the_in_flight_request() {
    let mock = Arc::new(MockRecipeService::new());
    mock.push_search(100, Ok(vec![recipe(1, "Late")]));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    type_text(&mut coordinator, &mut rx, "pasta", 0).await;
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(coordinator.state(), SearchState::InFlight { .. }));

    coordinator.clear();
    assert!(coordinator.state().is_idle());

    // The response arrives after the clear and must be discarded.
    advance(Duration::from_millis(100)).await;
    pump(&mut coordinator, &mut rx).await;
    assert!(coordinator.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn submit_now_bypasses_the_debounce_window() {
    let mock = Arc::new(MockRecipeService::new());
    mock.push_search(0, Ok(vec![recipe(1, "Pizza Margherita"), recipe(2, "Pizza Bianca")]));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    for c in "pizza".chars() {
        coordinator.on_input_char(c);
    }
    coordinator.submit_now();

    // The transition happens synchronously, with the first generation.
    assert!(matches!(
        coordinator.state(),
        SearchState::InFlight { query, generation: 1 } if query == "pizza"
    ));

    pump(&mut coordinator, &mut rx).await;
    assert!(matches!(
        coordinator.state(),
        SearchState::Succeeded { query, results } if query == "pizza" && results.len() == 2
    ));

    // The aborted debounce timer must not fire a second request.
    advance(Duration::from_millis(DEBOUNCE_MS * 2)).await;
    pump(&mut coordinator, &mut rx).await;
    assert_eq!(mock.search_calls(), vec!["search:pizza"]);
}

#[tokio::test(start_paused = true)]
async fn submit_now_with_short_input_does_nothing() {
    let mock = Arc::new(MockRecipeService::new());
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    coordinator.on_input_char('p');
    coordinator.submit_now();
    pump(&mut coordinator, &mut rx).await;

    assert!(coordinator.state().is_idle());
    assert!(mock.search_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failure_with_matching_generation_surfaces_the_error() {
    let mock = Arc::new(MockRecipeService::new());
    mock.push_search(0, Err(common::decode_error()));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    type_text(&mut coordinator, &mut rx, "dal", 0).await;
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    assert!(matches!(
        coordinator.state(),
        SearchState::Failed { query, .. } if query == "dal"
    ));
    // The typed text is left alone so the user can edit it.
    assert_eq!(coordinator.input(), "dal");
}

#[tokio::test(start_paused = true)]
async fn empty_result_is_a_success() {
    let mock = Arc::new(MockRecipeService::new());
    mock.push_search(0, Ok(Vec::new()));
    let (mut coordinator, mut rx) = make_coordinator(&mock);

    type_text(&mut coordinator, &mut rx, "zz", 0).await;
    advance(Duration::from_millis(DEBOUNCE_MS)).await;
    pump(&mut coordinator, &mut rx).await;

    assert!(matches!(
        coordinator.state(),
        SearchState::Succeeded { results, .. } if results.is_empty()
    ));
}
