use crate::models::{Session, UserIdentity};

/// Trait for session storage backends.
///
/// The API client is the only writer during normal operation and performs
/// every write while holding its refresh lock.
pub trait SessionStore: Send + Sync {
    /// Snapshot of the current session.
    fn get(&self) -> Session;

    /// Install a new access token and mark the session authenticated.
    ///
    /// With `user == None` the existing identity is kept; if there is none it
    /// is decoded from the token.
    fn set_token(&self, token: String, user: Option<UserIdentity>);

    /// Install credentials from a fresh login.
    fn set_credentials(&self, token: String, user: Option<UserIdentity>) {
        self.set_token(token, user)
    }

    /// Forget everything: token, user and the authenticated flag.
    fn clear(&self);
}
