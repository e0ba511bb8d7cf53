use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{
    ApiErrorBody, LoginRequest, LoginSession, LoginResponse, Recipe, RecipeDetail,
    RecipesResponse,
};
use crate::config::ApiConfig;

/// The five read operations plus login the app needs from the recipe
/// service. Object-safe so the UI layer can hold an `Arc<dyn RecipeService>`
/// and tests can substitute a scripted implementation.
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Ordered recipe summaries, at most `limit` entries.
    async fn fetch_featured(&self, limit: u32) -> Result<Vec<Recipe>, ApiError>;

    /// Same contract as [`fetch_featured`](Self::fetch_featured) but sorted
    /// by rating descending on the server side; the client never re-sorts.
    async fn fetch_popular(&self, limit: u32) -> Result<Vec<Recipe>, ApiError>;

    /// Ordered distinct tag strings; not paginated.
    async fn fetch_tags(&self) -> Result<Vec<String>, ApiError>;

    /// Server-side search. The caller guarantees a non-empty query; an
    /// empty result list is a valid success.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ApiError>;

    /// Full recipe for a detail view. A 404 maps to [`ApiError::NotFound`].
    async fn fetch_detail(&self, id: i64) -> Result<RecipeDetail, ApiError>;

    /// Credential login. Non-2xx responses decode the service's error body
    /// into [`ApiError::Auth`].
    async fn login(
        &self,
        username: &str,
        password: &str,
        expires_in_mins: u32,
    ) -> Result<LoginSession, ApiError>;
}

/// reqwest-backed implementation of [`RecipeService`].
pub struct HttpRecipeClient {
    client: Client,
    base_url: String,
}

impl HttpRecipeClient {
    pub fn new(cfg: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(cfg.request_timeout())
            .connect_timeout(cfg.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET, fail on non-2xx, then decode the body.
    ///
    /// Decoding goes through raw bytes rather than `Response::json` so that
    /// shape mismatches surface as [`ApiError::Decode`] instead of being
    /// folded into the transport error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RecipeService for HttpRecipeClient {
    async fn fetch_featured(&self, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        let response: RecipesResponse = self
            .get_json("/recipes", &[("limit", limit.to_string())])
            .await?;
        Ok(response.recipes)
    }

    async fn fetch_popular(&self, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        let response: RecipesResponse = self
            .get_json(
                "/recipes",
                &[
                    ("sortBy", "rating".to_string()),
                    ("order", "desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(response.recipes)
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/recipes/tags", &[]).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let response: RecipesResponse = self
            .get_json("/recipes/search", &[("q", query.to_string())])
            .await?;
        Ok(response.recipes)
    }

    async fn fetch_detail(&self, id: i64) -> Result<RecipeDetail, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/recipes/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { id });
        }

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        expires_in_mins: u32,
    ) -> Result<LoginSession, ApiError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest {
                username,
                password,
                expires_in_mins,
            })
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let login: LoginResponse = serde_json::from_slice(&bytes)?;
            tracing::info!(username = %login.username, "login accepted");
            return Ok(login.into());
        }

        // The service reports rejections as a small JSON object with a
        // `message` or `error` field; fall back to the bare status code.
        let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
            .map(|body| body.into_message(status.as_u16()))
            .unwrap_or_else(|_| format!("status {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), "login rejected");
        Err(ApiError::Auth { message })
    }
}
