//! Shared test doubles: a scripted recipe service and an in-memory
//! session store.

#![allow(dead_code)]

pub mod mock_api;

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use savor::api::{ApiError, LoginSession, Recipe, RecipeDetail, RecipeService};
use savor::session::{SessionError, SessionFlags, SessionStore};

pub fn recipe(id: i64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: format!("https://example.com/{id}.png"),
        rating: Some(4.5),
        cuisine: Some("Italian".to_string()),
        tags: None,
        meal_type: Some(vec!["Dinner".to_string()]),
    }
}

pub fn recipe_detail(id: i64, name: &str) -> RecipeDetail {
    RecipeDetail {
        id,
        name: name.to_string(),
        image: format!("https://example.com/{id}.png"),
        rating: Some(4.5),
        cuisine: Some("Italian".to_string()),
        ingredients: vec!["Flour".to_string(), "Water".to_string()],
        instructions: vec!["Mix".to_string(), "Bake".to_string()],
    }
}

/// An `ApiError::Decode` that can be scripted without a live transport.
pub fn decode_error() -> ApiError {
    serde_json::from_str::<i64>("not json")
        .expect_err("must not parse")
        .into()
}

type Scripted<T> = (u64, Result<T, ApiError>);

/// Scripted [`RecipeService`]: every call is recorded, search responses
/// are queued with an optional artificial delay so tests can interleave
/// completions out of order.
#[derive(Default)]
pub struct MockRecipeService {
    calls: Mutex<Vec<String>>,
    search: Mutex<VecDeque<Scripted<Vec<Recipe>>>>,
    featured: Mutex<Option<Result<Vec<Recipe>, ApiError>>>,
    tags: Mutex<Option<Result<Vec<String>, ApiError>>>,
    popular: Mutex<Option<Result<Vec<Recipe>, ApiError>>>,
    detail: Mutex<Option<Result<RecipeDetail, ApiError>>>,
    login: Mutex<Option<Result<LoginSession, ApiError>>>,
}

impl MockRecipeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next `search` call.
    pub fn push_search(&self, delay_ms: u64, result: Result<Vec<Recipe>, ApiError>) {
        self.search.lock().unwrap().push_back((delay_ms, result));
    }

    pub fn set_featured(&self, result: Result<Vec<Recipe>, ApiError>) {
        *self.featured.lock().unwrap() = Some(result);
    }

    pub fn set_tags(&self, result: Result<Vec<String>, ApiError>) {
        *self.tags.lock().unwrap() = Some(result);
    }

    pub fn set_popular(&self, result: Result<Vec<Recipe>, ApiError>) {
        *self.popular.lock().unwrap() = Some(result);
    }

    pub fn set_detail(&self, result: Result<RecipeDetail, ApiError>) {
        *self.detail.lock().unwrap() = Some(result);
    }

    pub fn set_login(&self, result: Result<LoginSession, ApiError>) {
        *self.login.lock().unwrap() = Some(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with("search:"))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecipeService for MockRecipeService {
    async fn fetch_featured(&self, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        self.record(format!("featured:{limit}"));
        self.featured
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(vec![recipe(1, "Classic Margherita")]))
    }

    async fn fetch_popular(&self, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        self.record(format!("popular:{limit}"));
        self.popular
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(vec![recipe(2, "Butter Chicken"), recipe(3, "Pad Thai")]))
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, ApiError> {
        self.record("tags".to_string());
        self.tags
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(vec!["Pizza".to_string(), "Pasta".to_string()]))
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        self.record(format!("search:{query}"));
        let (delay_ms, result) = self
            .search
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((0, Ok(Vec::new())));
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
        result
    }

    async fn fetch_detail(&self, id: i64) -> Result<RecipeDetail, ApiError> {
        self.record(format!("detail:{id}"));
        self.detail
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(recipe_detail(id, "Classic Margherita")))
    }

    async fn login(
        &self,
        username: &str,
        _password: &str,
        expires_in_mins: u32,
    ) -> Result<LoginSession, ApiError> {
        self.record(format!("login:{username}:{expires_in_mins}"));
        self.login.lock().unwrap().take().unwrap_or_else(|| {
            Ok(LoginSession {
                username: username.to_string(),
                token: Some("test-token".to_string()),
            })
        })
    }
}

/// In-memory [`SessionStore`] for driving the app without touching disk.
#[derive(Default)]
pub struct MemorySessionStore {
    flags: Mutex<Option<SessionFlags>>,
}

impl MemorySessionStore {
    pub fn with_flags(flags: SessionFlags) -> Self {
        Self {
            flags: Mutex::new(Some(flags)),
        }
    }

    /// The most recently saved flags, if any.
    pub fn saved(&self) -> Option<SessionFlags> {
        self.flags.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<SessionFlags, SessionError> {
        Ok(self.flags.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, flags: &SessionFlags) -> Result<(), SessionError> {
        *self.flags.lock().unwrap() = Some(flags.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.flags.lock().unwrap() = None;
        Ok(())
    }
}

/// Let spawned tasks (timers, request futures) make progress without
/// letting the paused clock auto-advance.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
