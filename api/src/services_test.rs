use super::*;
use crate::test_support::{BASE_URL, harness, user_json};
use crate::transport::Method;
use crate::types::{LeaderboardPeriod, TaskCategory, TaskStatus};

#[tokio::test]
async fn login_posts_credentials_as_form() {
    let h = harness();
    h.transport.reply(Method::Post, "/login", 200, serde_json::json!({ "access_token": "T" }));

    let response = h.client.auth().login("user@x.com", "secret").await.unwrap();

    assert_eq!(response.access_token, "T");
    assert_eq!(response.token_type, "bearer");
    assert!(response.user.is_none());
    let sent = h.transport.requests_to(Method::Post, "/login");
    assert_eq!(sent[0].body.as_deref(), Some("username=user%40x.com&password=secret"));
}

#[tokio::test]
async fn register_sends_json_without_confirmation() {
    let h = harness();
    h.transport.reply(Method::Post, "/register", 201, serde_json::json!({ "id": "u-9" }));
    let request = RegisterRequest {
        username: "newbie".into(),
        email: "new@x.com".into(),
        password: "secret1".into(),
        full_name: "New Person".into(),
        department: "HR".into(),
    };

    let body = h.client.auth().register(&request).await.unwrap();

    assert_eq!(body["id"], "u-9");
    let sent: serde_json::Value =
        serde_json::from_str(h.transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["username"], "newbie");
    assert!(sent.get("confirm_password").is_none());
}

#[tokio::test]
async fn current_user_reads_user_me() {
    let h = harness();
    h.transport.reply(Method::Get, "/user/me", 200, user_json("u-1"));

    let user = h.client.auth().current_user().await.unwrap();

    assert_eq!(user.id, "u-1");
    assert_eq!(user.points_total, 1250);
}

#[tokio::test]
async fn logout_accepts_empty_body() {
    let h = harness();
    h.transport.reply_empty(Method::Post, "/logout", 204);
    h.client.auth().logout().await.unwrap();
}

#[tokio::test]
async fn task_list_forwards_filters() {
    let h = harness();
    h.transport.reply(
        Method::Get,
        "/tasks",
        200,
        serde_json::json!([{ "id": "t-1", "title": "Plant trees", "category": "environmental", "points": 50 }]),
    );
    let params = TaskFilterParams {
        status: Some(TaskStatus::Published),
        category: Some(TaskCategory::Environmental),
        page: Some(2),
        ..TaskFilterParams::default()
    };

    let tasks = h.client.tasks().list(&params).await.unwrap();

    assert_eq!(tasks[0].points_reward, 50);
    assert_eq!(
        h.transport.requests()[0].url,
        format!("{BASE_URL}/tasks?status=published&category=environmental&page=2")
    );
}

#[tokio::test]
async fn task_crud_uses_id_paths() {
    let h = harness();
    let task = serde_json::json!({ "id": "t-7", "title": "Volunteer" });
    h.transport.reply(Method::Get, "/tasks/t-7", 200, task.clone());
    h.transport.reply(Method::Put, "/tasks/t-7", 200, task);
    h.transport.reply_empty(Method::Delete, "/tasks/t-7", 204);

    assert_eq!(h.client.tasks().get("t-7").await.unwrap().title, "Volunteer");
    let update = UpdateTaskRequest { title: Some("Volunteer".into()), ..UpdateTaskRequest::default() };
    h.client.tasks().update("t-7", &update).await.unwrap();
    h.client.tasks().delete("t-7").await.unwrap();

    let sent = h.transport.requests();
    assert_eq!(sent[1].body.as_deref(), Some(r#"{"title":"Volunteer"}"#));
    assert_eq!(sent[2].method, Method::Delete);
}

#[tokio::test]
async fn complete_without_evidence_sends_no_body() {
    let h = harness();
    let reply = serde_json::json!({ "message": "done", "points_earned": 30 });
    h.transport.reply(Method::Post, "/tasks/t-1/complete", 200, reply.clone());
    h.transport.reply(Method::Post, "/tasks/t-1/complete", 200, reply);

    let first = h.client.tasks().complete("t-1", None).await.unwrap();
    let evidence = TaskCompletionRequest { evidence: Some("photo.jpg".into()), feedback: None };
    h.client.tasks().complete("t-1", Some(&evidence)).await.unwrap();

    assert_eq!(first.points_earned, 30);
    let sent = h.transport.requests();
    assert_eq!(sent[0].body, None);
    assert_eq!(sent[1].body.as_deref(), Some(r#"{"evidence":"photo.jpg"}"#));
}

#[tokio::test]
async fn participate_returns_participation() {
    let h = harness();
    h.transport.reply(
        Method::Post,
        "/tasks/t-1/participate",
        200,
        serde_json::json!({ "id": "p-1", "task_id": "t-1", "user_id": "u-1", "status": "participating" }),
    );

    let participation = h.client.tasks().participate("t-1").await.unwrap();

    assert_eq!(participation.status, crate::types::ParticipationStatus::Participating);
}

#[tokio::test]
async fn leaderboard_passes_period_and_department() {
    let h = harness();
    h.transport.reply(
        Method::Get,
        "/points/leaderboard",
        200,
        serde_json::json!([{ "id": "u-1", "username": "zhangwei", "points_total": 1250, "rank": 1 }]),
    );
    let params = LeaderboardParams {
        period: Some(LeaderboardPeriod::Month),
        department: Some("R&D".into()),
        limit: Some(10),
        page: None,
    };

    let rows = h.client.points().leaderboard(&params).await.unwrap();

    assert_eq!(rows[0].points, 1250);
    assert_eq!(
        h.transport.requests()[0].url,
        format!("{BASE_URL}/points/leaderboard?period=month&department=R%26D&limit=10")
    );
}

#[tokio::test]
async fn summary_and_history_hit_points_routes() {
    let h = harness();
    h.transport.reply(Method::Get, "/points/summary", 200, serde_json::json!({ "total_points": 900, "rank": 4 }));
    h.transport.reply(Method::Get, "/points/history", 200, serde_json::json!([]));

    let summary = h.client.points().summary().await.unwrap();
    let history = h.client.points().history(&PointHistoryParams::default()).await.unwrap();

    assert_eq!(summary.total_points, 900);
    assert!(history.is_empty());
    assert_eq!(h.transport.requests()[1].url, format!("{BASE_URL}/points/history"));
}

#[tokio::test]
async fn profile_path_depends_on_user_id() {
    let h = harness();
    h.transport.reply(Method::Get, "/users/profile", 200, user_json("me"));
    h.transport.reply(Method::Get, "/users/u-2/profile", 200, user_json("u-2"));

    assert_eq!(h.client.users().profile(None).await.unwrap().id, "me");
    assert_eq!(h.client.users().profile(Some("u-2")).await.unwrap().id, "u-2");
}

#[tokio::test]
async fn change_password_posts_both_passwords() {
    let h = harness();
    h.transport.reply(Method::Post, "/users/change-password", 200, serde_json::json!({ "message": "ok" }));

    h.client.users().change_password("old-pw", "new-pw").await.unwrap();

    let sent: serde_json::Value =
        serde_json::from_str(h.transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, serde_json::json!({ "old_password": "old-pw", "new_password": "new-pw" }));
}

#[tokio::test]
async fn update_profile_omits_unset_fields() {
    let h = harness();
    h.transport.reply(Method::Put, "/users/profile", 200, user_json("me"));
    let update = ProfileUpdate { full_name: Some("Zhang Wei".into()), ..ProfileUpdate::default() };

    h.client.users().update_profile(&update).await.unwrap();

    assert_eq!(h.transport.requests()[0].body.as_deref(), Some(r#"{"full_name":"Zhang Wei"}"#));
}

#[tokio::test]
async fn task_ids_are_encoded_as_single_segments() {
    let h = harness();

    for id in ["../users/profile", "1?status=archived", "a/b#frag", "50% off"] {
        let _ = h.client.tasks().get(id).await;
    }

    let urls: Vec<_> = h.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/tasks/..%2Fusers%2Fprofile"),
            format!("{BASE_URL}/tasks/1%3Fstatus%3Darchived"),
            format!("{BASE_URL}/tasks/a%2Fb%23frag"),
            format!("{BASE_URL}/tasks/50%25%20off"),
        ]
    );
}

#[tokio::test]
async fn dot_and_empty_ids_are_rejected_before_sending() {
    let h = harness();

    for id in ["", ".", ".."] {
        let err = h.client.tasks().participate(id).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)), "{id:?}: {err:?}");
    }
    let err = h.client.users().profile(Some("..")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl(_)));

    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn profile_id_is_encoded() {
    let h = harness();
    h.transport.reply(Method::Get, "/users/a%2Fb/profile", 200, user_json("a/b"));

    let user = h.client.users().profile(Some("a/b")).await.unwrap();

    assert_eq!(user.id, "a/b");
}
