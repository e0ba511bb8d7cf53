//! Persisted session flags.
//!
//! The app keeps exactly four pieces of cross-launch state: whether the
//! user is logged in, the session token, the username, and whether the
//! onboarding walkthrough was completed. They are modeled as one small
//! record behind an injectable store so nothing reads them as ambient
//! global state.

mod file;
mod token;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileSessionStore;
pub use token::SecureToken;

/// The whole of the persisted key-value state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionFlags {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<SecureToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub onboarding_seen: bool,
}

impl SessionFlags {
    /// Flags after a logout: credentials dropped, the onboarding marker
    /// survives so the walkthrough is not shown again.
    pub fn logged_out(&self) -> Self {
        Self {
            logged_in: false,
            token: None,
            username: None,
            onboarding_seen: self.onboarding_seen,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize session flags: {source}")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}

/// Injectable persistence seam for [`SessionFlags`].
///
/// Read once at startup, written on login/logout and when onboarding
/// completes. Implementations must tolerate a missing backing file by
/// returning default flags.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<SessionFlags, SessionError>;
    fn save(&self, flags: &SessionFlags) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}
