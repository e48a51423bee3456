use folio_admin::models::{Session, UserIdentity};
use folio_admin::session::{MemorySessionStore, SessionStore};
use folio_admin::{ApiClient, ApiError, ApiRequest};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const REFRESH: &str = "/api/v1/auth/refresh-token";

/// Matches requests that carry no `authorization` header at all.
struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn admin() -> UserIdentity {
    UserIdentity {
        id: "u-1".to_string(),
        email: "admin@example.com".to_string(),
        role: "ADMIN".to_string(),
    }
}

fn session(token: Option<&str>) -> Session {
    Session {
        access_token: token.map(str::to_string),
        user: Some(admin()),
        is_authenticated: true,
    }
}

fn client_for(server: &MockServer, session: Session) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::with_session(session));
    let client = ApiClient::new(format!("{}/api/v1", server.uri()), store.clone()).unwrap();
    (client, store)
}

fn projects_body() -> serde_json::Value {
    json!({
        "success": true,
        "message": "Projects retrieved",
        "data": [{
            "id": "p-1",
            "title": "Folio",
            "description": "Portfolio admin client",
            "status": "ONGOING",
            "technologies": ["rust"],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }]
    })
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_request_retried() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer expiredTok"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "freshTok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer freshTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(Some("expiredTok")));

    //* When
    let response = client
        .execute(ApiRequest::get("/projects"))
        .await
        .expect("retried request should succeed");

    //* Then
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["data"][0]["id"], "p-1");

    let session = store.get();
    assert_eq!(session.access_token.as_deref(), Some("freshTok"));
    assert_eq!(session.user, Some(admin()));
    assert!(session.is_authenticated);
}

#[tokio::test]
async fn test_failed_refresh_clears_session_and_returns_original_401() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "refresh token revoked"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(Some("expiredTok")));

    //* When
    let err = client
        .execute(ApiRequest::get("/projects"))
        .await
        .expect_err("request should fail");

    //* Then
    match &err {
        ApiError::AuthFailed(response) => {
            assert_eq!(response.status(), 401);
            assert_eq!(response.error_message(), "jwt expired");
        }
        other => panic!("expected AuthFailed, got {:?}", other),
    }
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        store.get(),
        Session {
            access_token: None,
            user: None,
            is_authenticated: false,
        }
    );
}

#[tokio::test]
async fn test_concurrent_calls_share_a_single_refresh() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "freshTok"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer freshTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_body()))
        .expect(5)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(None));

    //* When
    let results = join_all((0..5).map(|_| {
        let client = client.clone();
        async move { client.execute(ApiRequest::get("/projects")).await }
    }))
    .await;

    //* Then
    for result in results {
        assert_eq!(result.unwrap().status(), 200);
    }
    assert_eq!(store.get().access_token.as_deref(), Some("freshTok"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_401s_across_tasks_refresh_once() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(header("authorization", "Bearer expiredTok"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "freshTok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .and(header("authorization", "Bearer freshTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(8)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, session(Some("expiredTok")));

    //* When
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.execute(ApiRequest::get("/blogs")).await })
        })
        .collect();

    //* Then
    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn test_valid_token_never_triggers_refresh() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "other"})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/skills"))
        .and(header("authorization", "Bearer goodTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(3)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(Some("goodTok")));

    //* When
    for _ in 0..3 {
        client.execute(ApiRequest::get("/skills")).await.unwrap();
    }

    //* Then
    assert_eq!(store.get().access_token.as_deref(), Some("goodTok"));
}

#[tokio::test]
async fn test_second_401_after_refresh_is_not_retried_again() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/contacts"))
        .and(header("authorization", "Bearer expiredTok"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "freshTok"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/contacts"))
        .and(header("authorization", "Bearer freshTok"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(Some("expiredTok")));

    //* When
    let err = client
        .execute(ApiRequest::get("/contacts"))
        .await
        .expect_err("retry should surface the 401");

    //* Then
    assert!(matches!(err, ApiError::Status(ref r) if r.status() == 401));
    // Refresh succeeded, so the session stays.
    assert_eq!(store.get().access_token.as_deref(), Some("freshTok"));
}

#[tokio::test]
async fn test_preflight_refresh_failure_still_sends_request() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/educations"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(None));

    //* When
    let err = client
        .execute(ApiRequest::get("/educations"))
        .await
        .expect_err("request should fail");

    //* Then
    assert!(err.is_auth_failed());
    assert!(!store.get().is_authenticated);
}

#[tokio::test]
async fn test_preflight_refresh_installs_token_before_request() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Access token refreshed",
            "data": {"accessToken": "freshTok"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile"))
        .and(header("authorization", "Bearer freshTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "u-1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(None));

    //* When
    client
        .execute(ApiRequest::get("/users/profile"))
        .await
        .unwrap();

    //* Then
    let session = store.get();
    assert_eq!(session.access_token.as_deref(), Some("freshTok"));
    assert_eq!(session.user, Some(admin()));
}

#[tokio::test]
async fn test_anonymous_session_skips_preflight_refresh() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "x"})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/technologies"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, Session::default());

    //* When
    let response = client.execute(ApiRequest::get("/technologies")).await;

    //* Then
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_application_errors_pass_through() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "x"})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/projects/p-404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"success": false, "message": "Project not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, session(Some("goodTok")));

    //* When
    let err = client
        .execute(ApiRequest::delete("/projects/p-404"))
        .await
        .unwrap_err();

    //* Then
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "API error (status 404 Not Found): Project not found"
    );
    assert!(store.get().is_authenticated);
}

#[tokio::test]
async fn test_transport_error_is_returned_and_lock_released() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/fast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_session(session(Some("goodTok"))));
    let client = ApiClient::builder(format!("{}/api/v1", server.uri()), store)
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    //* When
    let slow = client.execute(ApiRequest::get("/slow")).await;
    let fast = tokio::time::timeout(
        Duration::from_secs(1),
        client.execute(ApiRequest::get("/fast")),
    )
    .await;

    //* Then
    assert!(matches!(slow, Err(ApiError::Transport(_))));
    assert!(fast.expect("lock should be free").is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    let store = Arc::new(MemorySessionStore::with_session(session(Some("goodTok"))));
    let client = ApiClient::new("http://127.0.0.1:1/api/v1", store.clone()).unwrap();

    let err = client.execute(ApiRequest::get("/projects")).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(store.get().is_authenticated);
}

#[tokio::test]
async fn test_cancelled_call_releases_lock() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/fast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, session(Some("goodTok")));

    //* When
    let held = {
        let client = client.clone();
        tokio::spawn(async move { client.execute(ApiRequest::get("/slow")).await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    held.abort();

    let fast = tokio::time::timeout(
        Duration::from_secs(1),
        client.execute(ApiRequest::get("/fast")),
    )
    .await;

    //* Then
    assert!(held.await.unwrap_err().is_cancelled());
    assert!(fast.expect("lock should be free").is_ok());
}

#[tokio::test]
async fn test_caller_authorization_header_is_replaced() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/about"))
        .and(header("authorization", "Bearer goodTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, session(Some("goodTok")));

    //* When
    let request = ApiRequest::get("/about")
        .header("authorization", "Bearer forged")
        .unwrap();
    let response = client.execute(request).await.unwrap();

    //* Then
    assert_eq!(response.data::<serde_json::Value>().unwrap(), None);
}
