use serde::{Deserialize, Serialize};

/// Recipe summary as returned by the list and search endpoints.
///
/// Immutable once decoded; identifiers are assigned by the external service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub meal_type: Option<Vec<String>>,
}

impl Recipe {
    /// Secondary line shown under the recipe name: cuisine when present,
    /// otherwise the first meal-type tag.
    pub fn subtitle(&self) -> &str {
        if let Some(cuisine) = &self.cuisine {
            return cuisine;
        }
        self.meal_type
            .as_deref()
            .and_then(|tags| tags.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Rating rendered with one decimal, e.g. `★ 4.6`.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|rating| format!("★ {:.1}", rating))
    }
}

/// Full recipe as returned by the detail endpoint. Fetched lazily per
/// detail view and never cached across views.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDetail {
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|rating| format!("★ {:.1}", rating))
    }
}

/// Envelope used by the list and search endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct RecipesResponse {
    pub recipes: Vec<Recipe>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(rename = "expiresInMins")]
    pub expires_in_mins: u32,
}

/// Successful login response. The service returns more profile fields than
/// we need; only the ones the app uses are decoded.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub username: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// What the rest of the app keeps from a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub username: String,
    pub token: Option<String>,
}

impl From<LoginResponse> for LoginSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            username: response.username,
            token: response.token,
        }
    }
}

/// Error body the service sends on non-2xx responses. Either field may be
/// present depending on the endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self, status: u16) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| format!("status {status}"))
    }
}
