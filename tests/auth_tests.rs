// Authentication flow tests against a mock HTTP server

use mockito::Matcher;
use pw_client::prelude::*;
use serde_json::json;

fn test_builder(server: &mockito::ServerGuard) -> ClientBuilder {
    let credentials = Arc::new(Credentials::new("user@example.com", "secret"));
    ClientBuilder::new(credentials)
        .with_core_base_url(server.url())
        .with_fabric_base_url(server.url())
}

#[tokio::test]
async fn test_lazy_login_before_first_request() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    let login = server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({
            "email": "user@example.com",
            "password": "secret",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "t1"}).to_string())
        .create_async()
        .await;

    let widgets = server
        .mock("GET", "/widgets")
        .match_header("authorization", "Bearer t1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": {"ok": true}}).to_string())
        .create_async()
        .await;

    let builder = test_builder(&server);
    let core = builder.core_client().unwrap();

    let value = core
        .api()
        .query("widgets", StatusCode::OK, Method::GET, None, None, Some(DATA_KEY))
        .await
        .unwrap();

    assert_eq!(value, json!({"ok": true}));
    assert_eq!(builder.credentials().token(), "t1");
    login.assert_async().await;
    widgets.assert_async().await;
}

#[tokio::test]
async fn test_reauthenticates_once_on_401() {
    let mut server = mockito::Server::new_async().await;

    let stale = server
        .mock("GET", "/widgets")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .create_async()
        .await;

    let login = server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "fresh"}).to_string())
        .create_async()
        .await;

    let retried = server
        .mock("GET", "/widgets")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": [1, 2]}).to_string())
        .create_async()
        .await;

    let builder = test_builder(&server);
    builder.credentials().set_token("stale");
    let core = builder.core_client().unwrap();

    let value = core
        .api()
        .query("widgets", StatusCode::OK, Method::GET, None, None, Some(DATA_KEY))
        .await
        .unwrap();

    assert_eq!(value, json!([1, 2]));
    // The token held afterwards is the one returned by the login exchange
    assert_eq!(builder.credentials().token(), "fresh");
    stale.assert_async().await;
    login.assert_async().await;
    retried.assert_async().await;
}

#[tokio::test]
async fn test_second_401_is_surfaced_without_another_reauth() {
    let mut server = mockito::Server::new_async().await;

    let stale = server
        .mock("GET", "/widgets")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .create_async()
        .await;

    // Exactly one login for the whole call
    let login = server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "fresh"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let still_unauthorized = server
        .mock("GET", "/widgets")
        .match_header("authorization", "Bearer fresh")
        .with_status(401)
        .create_async()
        .await;

    let builder = test_builder(&server);
    builder.credentials().set_token("stale");
    let core = builder.core_client().unwrap();

    let result = core
        .api()
        .query("widgets", StatusCode::OK, Method::GET, None, None, Some(DATA_KEY))
        .await;

    match result {
        Err(AppError::UnexpectedStatus { got, expected, .. }) => {
            assert_eq!(got, StatusCode::UNAUTHORIZED);
            assert_eq!(expected, StatusCode::OK);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    stale.assert_async().await;
    login.assert_async().await;
    still_unauthorized.assert_async().await;
}

#[tokio::test]
async fn test_failed_login_is_fatal() {
    let mut server = mockito::Server::new_async().await;

    let login = server
        .mock("POST", "/login")
        .with_status(403)
        .with_body(json!({"message": "nope"}).to_string())
        .create_async()
        .await;

    let builder = test_builder(&server);
    let core = builder.core_client().unwrap();

    let result = core
        .api()
        .query("widgets", StatusCode::OK, Method::GET, None, None, Some(DATA_KEY))
        .await;

    match result {
        Err(AppError::AuthenticationFailed { status }) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
    assert!(!builder.credentials().has_token());
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_response_without_token_is_malformed() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": true}).to_string())
        .create_async()
        .await;

    let builder = test_builder(&server);
    let core = builder.core_client().unwrap();

    let result = core
        .api()
        .query("widgets", StatusCode::OK, Method::GET, None, None, Some(DATA_KEY))
        .await;

    assert!(matches!(result, Err(AppError::MalformedResponse(_))));
}
