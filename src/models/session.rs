use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Client-side record of the current authentication state.
///
/// `is_authenticated` tracks whether a login has succeeded; it stays `true`
/// while the access token is missing so a refresh can be attempted. Only an
/// explicit clear resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<UserIdentity>,
    pub is_authenticated: bool,
}

impl Session {
    /// Logged in at some point but currently holding no access token.
    pub fn needs_refresh(&self) -> bool {
        self.is_authenticated && self.access_token.is_none()
    }
}
