use std::sync::{PoisonError, RwLock};

use super::storage::SessionStore;
use crate::auth::decode_identity;
use crate::models::{Session, UserIdentity};

/// Process-local session holder.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }

    /// Replace the whole session, e.g. after restoring it from disk.
    pub fn replace(&self, session: Session) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: String, user: Option<UserIdentity>) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        let user = user
            .or_else(|| session.user.take())
            .or_else(|| decode_identity(&token));
        session.access_token = Some(token);
        session.user = user;
        session.is_authenticated = true;
    }

    /// A login replaces the identity outright instead of inheriting it.
    fn set_credentials(&self, token: String, user: Option<UserIdentity>) {
        let user = user.or_else(|| decode_identity(&token));
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session {
            access_token: Some(token),
            user,
            is_authenticated: true,
        };
    }

    fn clear(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session::default();
    }
}
