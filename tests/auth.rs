use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use folio_admin::models::{Session, UserIdentity};
use folio_admin::session::{MemorySessionStore, SessionStore};
use folio_admin::{ApiClient, ApiError};
use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt(user_id: &str, email: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"userId": user_id, "email": email, "role": role, "exp": 1_900_000_000})
            .to_string(),
    );
    format!("{}.{}.sig", header, payload)
}

fn client_for(server: &MockServer, session: Session) -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::with_session(session));
    let client = ApiClient::new(format!("{}/api/v1", server.uri()), store.clone()).unwrap();
    (client, store)
}

fn password(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

#[tokio::test]
async fn test_login_installs_token_and_identity_from_claims() {
    //* Given
    let server = MockServer::start().await;
    let token = jwt("u-7", "owner@example.com", "SUPER_ADMIN");

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"email": "owner@example.com", "password": "Secret123"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "refreshToken=r-1; Path=/; HttpOnly")
                .set_body_json(json!({
                    "success": true,
                    "message": "User logged in successfully",
                    "data": {"accessToken": token}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Session::default());

    //* When
    let user = client
        .login("owner@example.com", &password("Secret123"))
        .await
        .expect("login should succeed");

    //* Then
    assert_eq!(user.id, "u-7");
    assert_eq!(user.role, "SUPER_ADMIN");

    let session = store.get();
    assert_eq!(session.access_token.as_deref(), Some(token.as_str()));
    assert!(session.is_authenticated);
    assert_eq!(client.cookie_header().as_deref(), Some("refreshToken=r-1"));
}

#[tokio::test]
async fn test_refresh_sends_login_cookie() {
    //* Given
    let server = MockServer::start().await;
    let token = jwt("u-7", "owner@example.com", "ADMIN");

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "refreshToken=r-1; Path=/; HttpOnly")
                .set_body_json(json!({"data": {"accessToken": token}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh-token"))
        .and(header("cookie", "refreshToken=r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "freshTok"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Session::default());
    client
        .login("owner@example.com", &password("Secret123"))
        .await
        .unwrap();

    //* When
    client.refresh().await.expect("refresh should succeed");

    //* Then
    let session = store.get();
    assert_eq!(session.access_token.as_deref(), Some("freshTok"));
    assert_eq!(session.user.map(|u| u.id).as_deref(), Some("u-7"));
}

#[tokio::test]
async fn test_login_rejected_leaves_session_untouched() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Password incorrect"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Session::default());

    //* When
    let err = client
        .login("owner@example.com", &password("wrong"))
        .await
        .unwrap_err();

    //* Then
    assert!(matches!(err, ApiError::Status(_)));
    assert_eq!(err.status(), Some(401));
    assert_eq!(store.get(), Session::default());
}

#[tokio::test]
async fn test_login_without_identity_leaves_session_untouched() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"accessToken": "opaque"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server, Session::default());

    //* When
    let err = client
        .login("owner@example.com", &password("Secret123"))
        .await
        .unwrap_err();

    //* Then
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(store.get(), Session::default());
}

#[tokio::test]
async fn test_login_validates_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, Session::default());

    let err = client
        .login("not-an-email", &password("Secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = client
        .login("owner@example.com", &password(""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_logout_clears_session() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(header("authorization", "Bearer goodTok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(
        &server,
        Session {
            access_token: Some("goodTok".to_string()),
            user: Some(UserIdentity {
                id: "u-1".to_string(),
                email: "admin@example.com".to_string(),
                role: "ADMIN".to_string(),
            }),
            is_authenticated: true,
        },
    );

    //* When
    client.logout().await.unwrap();

    //* Then
    assert_eq!(store.get(), Session::default());
}

#[tokio::test]
async fn test_logout_with_dead_session_succeeds() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(
        &server,
        Session {
            access_token: Some("expiredTok".to_string()),
            user: None,
            is_authenticated: true,
        },
    );

    //* When
    let result = client.logout().await;

    //* Then
    assert!(result.is_ok());
    assert!(!store.get().is_authenticated);
}

#[tokio::test]
async fn test_logout_server_error_still_clears_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (client, store) = client_for(
        &server,
        Session {
            access_token: Some("goodTok".to_string()),
            user: None,
            is_authenticated: true,
        },
    );

    let err = client.logout().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(store.get(), Session::default());
}

#[tokio::test]
async fn test_change_password_sends_both_passwords() {
    //* Given
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/auth/change-password"))
        .and(header("authorization", "Bearer goodTok"))
        .and(body_json(json!({"oldPassword": "Secret123", "newPassword": "Better456"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(
        &server,
        Session {
            access_token: Some("goodTok".to_string()),
            user: None,
            is_authenticated: true,
        },
    );

    //* When
    let result = client
        .change_password(&password("Secret123"), &password("Better456"))
        .await;

    //* Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_change_password_rejects_weak_password() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server, Session::default());

    for weak in ["short1A", "alllowercase1", "NoDigitsHere", "With space 1A"] {
        let err = client
            .change_password(&password("Secret123"), &password(weak))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "{} accepted", weak);
    }
}
