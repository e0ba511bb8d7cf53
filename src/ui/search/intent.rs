use crate::api::Recipe;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Input trimmed to a query that passed the minimum-length check.
    QueryAccepted { query: String },
    /// Input fell below the minimum length (but is not empty).
    QueryRejected,
    /// The coordinator assigned a fresh generation and is issuing the
    /// request — either because the debounce window elapsed or because the
    /// user submitted explicitly.
    Launched { query: String, generation: u64 },
    /// A request completed successfully. Applied only if `generation`
    /// matches the one recorded in the current `InFlight` state.
    Resolved {
        generation: u64,
        results: Vec<Recipe>,
    },
    /// A request failed. Same generation rule as `Resolved`.
    ResolveFailed { generation: u64, error: String },
    /// Input cleared, explicitly or by deleting all text.
    Cleared,
}

impl Intent for SearchIntent {}
