use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn swipes_are_counted_per_day() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    for direction in ["left", "right"] {
        let response = ctx
            .server
            .post("/activity/swipe")
            .authorization_bearer(&access_token)
            .json(&json!({ "challenge_id": id, "direction": direction }))
            .await;
        response.assert_status_ok();
    }

    let response = ctx
        .server
        .get("/activity/swipes/today")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["swipes_today"], 2);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn invalid_swipe_direction_is_rejected() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .post("/activity/swipe")
        .authorization_bearer(&access_token)
        .json(&json!({ "challenge_id": id, "direction": "up" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn repeat_views_are_recorded_once() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    for _ in 0..2 {
        let response = ctx
            .server
            .post("/activity/view")
            .authorization_bearer(&access_token)
            .json(&json!({ "challenge_id": id }))
            .await;
        response.assert_status_ok();
    }

    let response = ctx
        .server
        .get("/activity/viewed")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["viewed"], json!([id]));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn selections_show_up_in_the_selected_list() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .post("/activity/select")
        .authorization_bearer(&access_token)
        .json(&json!({ "challenge_id": id }))
        .await;
    response.assert_status_ok();

    let response = ctx
        .server
        .get("/activity/selected")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["selected"], json!([id]));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn tracking_requires_authentication() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/activity/swipe")
        .json(&json!({ "challenge_id": 1, "direction": "left" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}
