use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{SessionError, SessionFlags, SessionStore};

/// TOML-file-backed session store.
///
/// A missing file loads as default flags; `clear` removes the file
/// entirely.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `~/.local/share/savor/session.toml` on Unix, or
    /// the platform equivalent via `dirs::data_local_dir()`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("savor").join("session.toml")
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<SessionFlags, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(SessionFlags::default());
            }
            Err(err) => {
                return Err(SessionError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        toml::from_str(&content).map_err(|e| SessionError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, flags: &SessionFlags) -> Result<(), SessionError> {
        let content =
            toml::to_string(flags).map_err(|e| SessionError::Serialize { source: e })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| SessionError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Write {
                path: self.path.clone(),
                source: err,
            }),
        }
    }
}
