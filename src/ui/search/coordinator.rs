use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::api::{ApiError, Recipe, RecipeService};
use crate::config::SearchConfig;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::reducer::SearchReducer;
use crate::ui::search::state::SearchState;

/// Owns the query-to-results lifecycle for the dashboard search box.
///
/// Cancellation is two-tiered: pending debounce timers are cancelled
/// physically (the timer task is aborted and its epoch invalidated), while
/// in-flight requests are never cancelled at the transport level — their
/// completions are discarded when their generation no longer matches the
/// current `InFlight` state.
pub struct SearchCoordinator {
    state: SearchState,
    /// Raw text as typed, untrimmed. The trimmed form is the query.
    input: String,
    /// Monotonically increasing; bumped on every Debouncing → InFlight
    /// transition.
    generation: u64,
    /// Bumped whenever a timer is scheduled or cancelled, so a timer event
    /// that raced its own abort is ignored.
    timer_epoch: u64,
    timer: Option<JoinHandle<()>>,
    cfg: SearchConfig,
    service: Arc<dyn RecipeService>,
    events: UnboundedSender<AppEvent>,
}

impl SearchCoordinator {
    pub fn new(
        cfg: SearchConfig,
        service: Arc<dyn RecipeService>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            state: SearchState::Idle,
            input: String::new(),
            generation: 0,
            timer_epoch: 0,
            timer: None,
            cfg,
            service,
            events,
        }
    }

    /// Read-only snapshot for the view layer.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The text currently in the search box, as typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn on_input_char(&mut self, c: char) {
        self.input.push(c);
        self.on_input_changed();
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
        self.on_input_changed();
    }

    /// Replace the whole input, e.g. from a paste.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.on_input_changed();
    }

    /// Append pasted text after the current input.
    pub fn on_paste(&mut self, text: &str) {
        self.input.push_str(text);
        self.on_input_changed();
    }

    /// Explicit submit: bypass the remaining debounce window and launch
    /// immediately, provided the current text passes validation.
    pub fn submit_now(&mut self) {
        let Some(query) = self.valid_query() else {
            return;
        };
        self.cancel_timer();
        self.launch(query);
    }

    /// Explicit clear: back to `Idle`, dropping the pending timer and
    /// orphaning any in-flight request.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cancel_timer();
        self.dispatch(SearchIntent::Cleared);
    }

    /// The debounce timer fired. Stale epochs are timers that were
    /// superseded but whose completion was already in the channel.
    pub fn on_debounce_elapsed(&mut self, epoch: u64) {
        if epoch != self.timer_epoch {
            return;
        }
        self.timer = None;
        let query = match &self.state {
            SearchState::Debouncing { query } => query.clone(),
            _ => return,
        };
        self.launch(query);
    }

    /// A search request resolved. Only the completion whose generation is
    /// recorded in the current `InFlight` state may settle it.
    pub fn on_resolved(&mut self, generation: u64, result: Result<Vec<Recipe>, ApiError>) {
        let authoritative = matches!(
            &self.state,
            SearchState::InFlight { generation: current, .. } if *current == generation
        );
        if !authoritative {
            tracing::debug!(generation, "stale search completion dropped");
            return;
        }

        match result {
            Ok(results) => {
                tracing::debug!(generation, count = results.len(), "search resolved");
                self.dispatch(SearchIntent::Resolved {
                    generation,
                    results,
                });
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "search failed");
                self.dispatch(SearchIntent::ResolveFailed {
                    generation,
                    error: err.user_message(),
                });
            }
        }
    }

    fn on_input_changed(&mut self) {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.cancel_timer();
            self.dispatch(SearchIntent::Cleared);
            return;
        }
        if trimmed.chars().count() < self.cfg.min_query_len {
            self.cancel_timer();
            self.dispatch(SearchIntent::QueryRejected);
            return;
        }

        self.dispatch(SearchIntent::QueryAccepted {
            query: trimmed.to_string(),
        });
        self.restart_timer();
    }

    fn valid_query(&self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.cfg.min_query_len {
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Schedule (or reschedule) the debounce timer for the current input.
    fn restart_timer(&mut self) {
        self.cancel_timer();
        let epoch = self.timer_epoch;
        let window = self.cfg.debounce_window();
        let events = self.events.clone();
        self.timer = Some(tokio::spawn(async move {
            sleep(window).await;
            let _ = events.send(AppEvent::SearchDebounce { epoch });
        }));
    }

    fn cancel_timer(&mut self) {
        self.timer_epoch += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn launch(&mut self, query: String) {
        self.generation += 1;
        let generation = self.generation;
        tracing::debug!(%query, generation, "search dispatched");
        self.dispatch(SearchIntent::Launched {
            query: query.clone(),
            generation,
        });

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.search(&query).await;
            let _ = events.send(AppEvent::SearchResolved { generation, result });
        });
    }

    fn dispatch(&mut self, intent: SearchIntent) {
        self.state = SearchReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
