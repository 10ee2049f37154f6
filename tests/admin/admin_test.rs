use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

fn admin_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-token"),
        HeaderValue::from_static("test-admin-token"),
    )
}

#[tokio::test]
#[serial]
async fn admin_endpoints_require_the_token() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/admin/challenges")
        .json(&json!({ "title": "Sneaky challenge" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn wrong_admin_token_is_rejected() {
    let ctx = TestContext::new().await;

    let (name, _) = admin_header();
    let response = ctx
        .server
        .post("/admin/challenges")
        .add_header(name, HeaderValue::from_static("wrong-token"))
        .json(&json!({ "title": "Sneaky challenge" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn created_challenge_is_publicly_visible() {
    let ctx = TestContext::new().await;

    let (name, value) = admin_header();
    let response = ctx
        .server
        .post("/admin/challenges")
        .add_header(name, value)
        .json(&json!({
            "title": "Try a new recipe",
            "category": "nutrition",
            "size": "medium"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["size"], "medium");

    let response = ctx.server.get(&format!("/challenges/{}", id)).await;
    response.assert_status_ok();

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn duplicate_title_is_a_conflict() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge("Try a new recipe").await;

    let (name, value) = admin_header();
    let response = ctx
        .server
        .post("/admin/challenges")
        .add_header(name, value)
        .json(&json!({ "title": "Try a new recipe" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn invalid_size_is_rejected() {
    let ctx = TestContext::new().await;

    let (name, value) = admin_header();
    let response = ctx
        .server
        .post("/admin/challenges")
        .add_header(name, value)
        .json(&json!({ "title": "Try a new recipe", "size": "enormous" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn update_merges_over_the_existing_challenge() {
    let ctx = TestContext::new().await;
    let id = ctx
        .seed_challenge_full("Original title", "mindset", "small", false)
        .await;

    let (name, value) = admin_header();
    let response = ctx
        .server
        .put(&format!("/admin/challenges/{}", id))
        .add_header(name, value)
        .json(&json!({ "title": "Updated title" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "Updated title");
    // Untouched fields keep their values
    assert_eq!(body["category"], "mindset");
    assert_eq!(body["size"], "small");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn updating_a_missing_challenge_is_not_found() {
    let ctx = TestContext::new().await;

    let (name, value) = admin_header();
    let response = ctx
        .server
        .put("/admin/challenges/999999")
        .add_header(name, value)
        .json(&json!({ "title": "Does not matter" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn reset_today_clears_tracked_activity() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    ctx.server
        .post("/activity/swipe")
        .authorization_bearer(&access_token)
        .json(&json!({ "challenge_id": id, "direction": "left" }))
        .await
        .assert_status_ok();

    let (name, value) = admin_header();
    let response = ctx
        .server
        .post("/admin/reset-today")
        .add_header(name, value)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted_activities"], 1);

    let response = ctx
        .server
        .get("/activity/swipes/today")
        .authorization_bearer(&access_token)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["swipes_today"], 0);

    ctx.cleanup().await;
}
