use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};
use url::Url;

use super::request::ApiRequest;
use super::response::ApiResponse;
use crate::error::{ApiError, Result};
use crate::models::Session;
use crate::session::SessionStore;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";

const USER_AGENT: &str = concat!("folio-admin/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the portfolio API that attaches the session's bearer
/// token and recovers from expired tokens.
///
/// # Refresh coordination
///
/// Every [`execute`](Self::execute) call holds the client's refresh lock for
/// its whole duration. `tokio::sync::Mutex` queues waiters in FIFO order, so
/// when several calls find the token missing or rejected, the first one
/// refreshes and the rest observe the installed token instead of issuing
/// their own refresh. Only one refresh is ever in flight per client.
///
/// The guard is released on drop, which covers early returns, errors and
/// callers dropping the future mid-request.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    cookies: Arc<Jar>,
    refresh_lock: Mutex<()>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshPayload {
    access_token: String,
}

pub struct ApiClientBuilder {
    base_url: String,
    store: Arc<dyn SessionStore>,
    timeout: Option<Duration>,
    cookies: Option<Arc<Jar>>,
    user_agent: String,
}

impl ApiClientBuilder {
    /// Per-request timeout. Unset by default: the client imposes none.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share a cookie jar, e.g. one pre-seeded with a stored refresh cookie.
    pub fn cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.cookies = Some(jar);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid base URL {}: {}", base_url, e)))?;

        let cookies = self.cookies.unwrap_or_default();
        let mut http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(ApiClient {
            inner: Arc::new(ApiClientInner {
                http: http.build()?,
                base_url,
                store: self.store,
                cookies,
                refresh_lock: Mutex::new(()),
            }),
        })
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Result<Self> {
        Self::builder(base_url, store).build()
    }

    pub fn builder(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            store,
            timeout: None,
            cookies: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.inner.store
    }

    pub fn session(&self) -> Session {
        self.inner.store.get()
    }

    /// Send `request` with the current access token.
    ///
    /// - If the session is authenticated but holds no token, a refresh is
    ///   attempted first. Its failure is logged and the request is sent anyway.
    /// - On a 401 the token is refreshed and the request retried exactly once.
    ///   If the refresh fails the session is cleared and the original 401 is
    ///   returned as [`ApiError::AuthFailed`].
    ///
    /// Any other non-2xx response is returned as [`ApiError::Status`];
    /// transport failures as [`ApiError::Transport`]. Nothing else is retried.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let _guard = self.lock_session().await;

        if self.inner.store.get().needs_refresh() {
            debug!("authenticated session has no access token, refreshing first");
            if let Err(e) = self.refresh_locked().await {
                warn!(error = %e, "pre-flight token refresh failed, sending request anyway");
            }
        }

        let response = self.send(&request, true).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return into_result(response);
        }

        debug!("request rejected with 401, refreshing access token");
        match self.refresh_locked().await {
            Ok(()) => {
                // One retry only; a second 401 is handed back as-is.
                let retried = self.send(&request, true).await?;
                into_result(retried)
            }
            Err(e) => {
                warn!(error = %e, "token refresh failed, clearing session");
                self.inner.store.clear();
                Err(ApiError::AuthFailed(response))
            }
        }
    }

    /// Ask the API for a new access token outside of a request, under the
    /// same lock `execute` uses. The session is left untouched on failure.
    pub async fn refresh(&self) -> Result<()> {
        let _guard = self.lock_session().await;
        self.refresh_locked().await
    }

    /// Serializes session writes with in-flight `execute` calls.
    pub(crate) async fn lock_session(&self) -> MutexGuard<'_, ()> {
        self.inner.refresh_lock.lock().await
    }

    /// Caller must hold the refresh lock.
    async fn refresh_locked(&self) -> Result<()> {
        let response = self
            .send(&ApiRequest::post(REFRESH_TOKEN_PATH), false)
            .await?;
        if !response.is_success() {
            return Err(ApiError::Status(response));
        }

        let payload: RefreshPayload = response.data()?.ok_or_else(|| {
            ApiError::Decode(serde::de::Error::custom("refresh response carried no access token"))
        })?;
        self.inner.store.set_token(payload.access_token, None);
        debug!("access token refreshed");
        Ok(())
    }

    /// Single HTTP round trip. The `authorization` header is always derived
    /// from the session, never taken from the request.
    pub(crate) async fn send(&self, request: &ApiRequest, authorize: bool) -> Result<ApiResponse> {
        let url = self.url(&request.path)?;

        let mut headers = request.headers.clone();
        headers.remove(AUTHORIZATION);
        if authorize {
            if let Some(token) = self.inner.store.get().access_token {
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    ApiError::InvalidRequest(format!("Invalid authorization header: {}", e))
                })?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url)
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        ApiResponse::from_reqwest(response).await
    }

    fn url(&self, path: &str) -> Result<Url> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        };
        Url::parse(&joined)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid URL {}: {}", joined, e)))
    }

    /// `Cookie` header the jar would send with a refresh request, if any.
    pub fn cookie_header(&self) -> Option<String> {
        let url = self.url(REFRESH_TOKEN_PATH).ok()?;
        self.inner
            .cookies
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Seed the jar from a previously saved `Cookie` header. A saved header
    /// carries no path, so restored cookies apply to the whole host.
    pub fn restore_cookies(&self, header: &str) {
        let Ok(url) = self.url(REFRESH_TOKEN_PATH) else {
            return;
        };
        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            self.inner
                .cookies
                .add_cookie_str(&format!("{}; Path=/", pair), &url);
        }
    }
}

fn into_result(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response))
    }
}
