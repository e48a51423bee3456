//! Login, logout and password endpoints.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::validate;
use crate::auth::decode_identity;
use crate::error::{ApiError, Result};
use crate::models::UserIdentity;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    #[serde(default)]
    user: Option<UserIdentity>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    /// Exchange email and password for an access token and install it in the
    /// session. The refresh credential arrives as a cookie and is kept in the
    /// client's cookie jar.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<UserIdentity> {
        validate::email("email", email)?;
        validate::min_chars("password", password.expose_secret(), 1)?;

        let request = ApiRequest::post(LOGIN_PATH).json(&LoginRequest {
            email,
            password: password.expose_secret(),
        })?;

        let _guard = self.lock_session().await;
        let response = self.send(&request, false).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response));
        }

        let login: LoginResponse = response.data()?.ok_or_else(|| {
            ApiError::Decode(serde::de::Error::custom("login response carried no access token"))
        })?;
        let user = login
            .user
            .or_else(|| decode_identity(&login.access_token))
            .ok_or_else(|| {
                ApiError::Decode(serde::de::Error::custom(
                    "login response carried no user identity",
                ))
            })?;
        self.store()
            .set_credentials(login.access_token, Some(user.clone()));
        info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Log out on the server, then clear the local session.
    ///
    /// The local session is cleared even when the server call fails; the
    /// error is still returned.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let result = self.execute(ApiRequest::post(LOGOUT_PATH)).await;

        {
            let _guard = self.lock_session().await;
            self.store().clear();
        }

        match result {
            Ok(_) => {
                info!("logged out");
                Ok(())
            }
            // A dead session is exactly what logout wants.
            Err(ApiError::AuthFailed(_)) => Ok(()),
            Err(e) => {
                warn!(error = %e, "server logout failed, local session cleared");
                Err(e)
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn change_password(
        &self,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<()> {
        validate::min_chars("Current password", old_password.expose_secret(), 1)?;
        validate::password_strength(new_password.expose_secret())?;

        let request = ApiRequest::patch(CHANGE_PASSWORD_PATH).json(&ChangePasswordRequest {
            old_password: old_password.expose_secret(),
            new_password: new_password.expose_secret(),
        })?;
        self.execute(request).await?;
        Ok(())
    }
}
