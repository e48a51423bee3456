use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use super::memory::MemorySessionStore;
use super::storage::SessionStore;
use crate::models::{Session, UserIdentity};

pub const SESSION_FILE_NAME: &str = "session.json";

/// On-disk form of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    #[serde(flatten)]
    pub session: Session,
    /// `Cookie` header value holding the refresh credential for the API host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    pub updated_at: DateTime<Local>,
}

/// Session store that writes every change through to a JSON file so the
/// login survives between CLI invocations.
///
/// Persistence failures are logged and otherwise ignored: the in-memory
/// session stays authoritative for the running process.
pub struct FileSessionStore {
    path: PathBuf,
    memory: MemorySessionStore,
    cookie: RwLock<Option<String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, restoring a previously saved session if the
    /// file exists and parses.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stored = match Self::load(&path) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
                None
            }
        };
        let (session, cookie) = stored
            .map(|s| (s.session, s.cookie))
            .unwrap_or_default();

        Self {
            path,
            memory: MemorySessionStore::with_session(session),
            cookie: RwLock::new(cookie),
        }
    }

    /// `~/.cache/folio-admin/session.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join(".cache")
                .join("folio-admin")
                .join(SESSION_FILE_NAME)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> io::Result<Option<StoredSession>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let stored = serde_json::from_str(&content)?;
        Ok(Some(stored))
    }

    pub fn cookie(&self) -> Option<String> {
        self.cookie
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record the refresh cookie and persist it alongside the session.
    pub fn set_cookie(&self, cookie: Option<String>) {
        *self.cookie.write().unwrap_or_else(PoisonError::into_inner) = cookie;
        self.persist();
    }

    /// Write the current state to disk.
    pub fn save(&self) -> io::Result<()> {
        let session = self.memory.get();
        let cookie = self.cookie();

        if !session.is_authenticated && cookie.is_none() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            session,
            cookie,
            updated_at: Local::now(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, content)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session");
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Session {
        self.memory.get()
    }

    fn set_token(&self, token: String, user: Option<UserIdentity>) {
        self.memory.set_token(token, user);
        self.persist();
    }

    fn set_credentials(&self, token: String, user: Option<UserIdentity>) {
        self.memory.set_credentials(token, user);
        self.persist();
    }

    fn clear(&self) {
        self.memory.clear();
        *self.cookie.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.persist();
    }
}
