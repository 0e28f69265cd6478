use super::*;
use crate::error::TransportError;
use crate::test_support::{BASE_URL, harness};

// =============================================================
// Bearer injection
// =============================================================

#[tokio::test]
async fn request_without_token_has_no_authorization_header() {
    let h = harness();
    h.transport.reply(Method::Get, "/tasks", 200, serde_json::json!([]));

    let _: serde_json::Value = h.client.get("/tasks", &[]).await.unwrap();

    let sent = h.transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header("authorization"), None);
    assert_eq!(sent[0].header("Accept"), Some("application/json"));
}

#[tokio::test]
async fn every_request_carries_the_stored_bearer_token() {
    let h = harness();
    h.client.store_token("tok-1");
    h.transport.reply(Method::Get, "/points/summary", 200, serde_json::json!({}));
    h.transport.reply(Method::Post, "/tasks/t-1/participate", 200, serde_json::json!({}));
    h.transport.reply_empty(Method::Delete, "/tasks/t-1", 204);

    let _: serde_json::Value = h.client.get("/points/summary", &[]).await.unwrap();
    let _: serde_json::Value = h.client.post_empty("/tasks/t-1/participate").await.unwrap();
    h.client.delete("/tasks/t-1").await.unwrap();

    let sent = h.transport.requests();
    assert_eq!(sent.len(), 3);
    for request in sent {
        assert_eq!(request.header("Authorization"), Some("Bearer tok-1"));
    }
}

#[tokio::test]
async fn header_follows_token_changes() {
    let h = harness();
    h.client.store_token("old");
    let _ = h.client.get::<serde_json::Value>("/user/me", &[]).await;
    h.client.store_token("new");
    let _ = h.client.get::<serde_json::Value>("/user/me", &[]).await;

    let sent = h.transport.requests();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer old"));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer new"));
}

// =============================================================
// URL and body encoding
// =============================================================

#[tokio::test]
async fn query_pairs_are_url_encoded() {
    let h = harness();
    let query = [("department", "R&D".to_owned()), ("limit", "10".to_owned())];
    let _ = h.client.get::<serde_json::Value>("/points/leaderboard", &query).await;

    let sent = h.transport.requests();
    assert_eq!(sent[0].url, format!("{BASE_URL}/points/leaderboard?department=R%26D&limit=10"));
}

#[tokio::test]
async fn form_body_sets_content_type() {
    let h = harness();
    let _ = h
        .client
        .post_form::<serde_json::Value>("/login", &[("username", "user@x.com"), ("password", "a b")])
        .await;

    let sent = h.transport.requests();
    assert_eq!(sent[0].header("Content-Type"), Some("application/x-www-form-urlencoded"));
    assert_eq!(sent[0].body.as_deref(), Some("username=user%40x.com&password=a+b"));
}

#[tokio::test]
async fn json_body_sets_content_type() {
    let h = harness();
    let _ = h
        .client
        .put_json::<_, serde_json::Value>("/users/profile", &serde_json::json!({ "full_name": "Liu Ming" }))
        .await;

    let sent = h.transport.requests();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    assert_eq!(sent[0].body.as_deref(), Some(r#"{"full_name":"Liu Ming"}"#));
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let h = harness();
    let client = ApiClient::new(
        "http://api.test/api/ ",
        h.transport.clone(),
        h.tokens.clone(),
        h.navigator.clone(),
    );
    assert_eq!(client.base_url(), "http://api.test/api");
}

#[tokio::test]
async fn requests_use_fixed_timeout() {
    let h = harness();
    let _ = h.client.get::<serde_json::Value>("/tasks", &[]).await;
    assert_eq!(h.transport.requests()[0].timeout, Duration::from_secs(10));
}

// =============================================================
// Failures
// =============================================================

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let h = harness();
    h.transport.reply(Method::Post, "/register", 400, serde_json::json!({ "detail": "Email already registered" }));

    let err = h
        .client
        .post_json::<_, serde_json::Value>("/register", &serde_json::json!({}))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Status { status: 400, detail: Some("Email already registered".to_owned()) });
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn transport_failure_is_propagated_without_retry() {
    let h = harness();
    h.transport.fail(Method::Get, "/tasks", TransportError::Timeout(REQUEST_TIMEOUT));

    let err = h.client.get::<serde_json::Value>("/tasks", &[]).await.unwrap_err();

    assert_eq!(err, ApiError::Transport(TransportError::Timeout(REQUEST_TIMEOUT)));
    assert_eq!(h.transport.requests().len(), 1);
}

#[tokio::test]
async fn empty_body_decodes_into_unit() {
    let h = harness();
    h.transport.reply_empty(Method::Post, "/users/change-password", 204);
    let result: Result<(), ApiError> = h.client.post_empty("/users/change-password").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let h = harness();
    h.transport.reply(Method::Get, "/points/summary", 200, serde_json::json!("not an object"));
    let err = h.client.get::<crate::types::PointSummary>("/points/summary", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// 401 policy
// =============================================================

#[tokio::test]
async fn unauthorized_clears_token_and_navigates_to_login() {
    let h = harness();
    h.client.store_token("expired");
    h.transport.reply(Method::Get, "/user/me", 401, serde_json::json!({ "detail": "Not authenticated" }));

    let err = h.client.get::<serde_json::Value>("/user/me", &[]).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.client.token(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn concurrent_unauthorized_responses_navigate_once() {
    let h = harness();
    h.client.store_token("expired");
    for path in ["/tasks", "/points/summary", "/user/me"] {
        h.transport.reply(Method::Get, path, 401, serde_json::json!({}));
    }

    let (a, b, c) = tokio::join!(
        h.client.get::<serde_json::Value>("/tasks", &[]),
        h.client.get::<serde_json::Value>("/points/summary", &[]),
        h.client.get::<serde_json::Value>("/user/me", &[]),
    );

    assert!(a.unwrap_err().is_unauthorized());
    assert!(b.unwrap_err().is_unauthorized());
    assert!(c.unwrap_err().is_unauthorized());
    assert_eq!(h.client.token(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn sequential_unauthorized_responses_navigate_once_until_rearmed() {
    let h = harness();
    h.client.store_token("first");
    h.transport.reply(Method::Get, "/tasks", 401, serde_json::json!({}));
    h.transport.reply(Method::Get, "/tasks", 401, serde_json::json!({}));
    h.transport.reply(Method::Get, "/tasks", 401, serde_json::json!({}));

    let _ = h.client.get::<serde_json::Value>("/tasks", &[]).await;
    let _ = h.client.get::<serde_json::Value>("/tasks", &[]).await;
    assert_eq!(h.navigator.visits().len(), 1);

    h.client.store_token("second");
    let _ = h.client.get::<serde_json::Value>("/tasks", &[]).await;
    assert_eq!(h.navigator.visits().len(), 2);
    assert_eq!(h.client.token(), None);
}

#[tokio::test]
async fn unauthorized_without_token_still_redirects_once() {
    let h = harness();
    h.transport.reply(Method::Post, "/login", 401, serde_json::json!({ "detail": "Invalid credentials" }));

    let err = h.client.post_form::<serde_json::Value>("/login", &[]).await.unwrap_err();

    assert_eq!(err.user_message("fallback"), "Invalid credentials");
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[tokio::test]
async fn stale_unauthorized_does_not_clear_newer_token() {
    let h = harness();
    h.client.store_token("stale");
    h.transport.reply(Method::Get, "/tasks", 401, serde_json::json!({}));

    let pending = h.client.get::<serde_json::Value>("/tasks", &[]);
    tokio::pin!(pending);
    // Park the request inside the transport, then log in again.
    let early = tokio::select! {
        biased;
        r = &mut pending => Some(r),
        () = std::future::ready(()) => None,
    };
    assert!(early.is_none());
    h.client.store_token("fresh");
    let result = pending.await;

    assert!(result.unwrap_err().is_unauthorized());
    assert_eq!(h.client.token().as_deref(), Some("fresh"));
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn end_session_navigates_once_per_latch() {
    let h = harness();
    h.client.store_token("tok");
    assert!(h.client.end_session());
    assert!(!h.client.end_session());
    assert_eq!(h.client.token(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}
