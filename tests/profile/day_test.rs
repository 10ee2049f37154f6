use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn day_progress_requires_authentication() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/profile/day").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn fresh_user_has_an_empty_day() {
    let ctx = TestContext::new().await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .get("/profile/day")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["challenges_today"], 0);
    assert_eq!(body["replacements_today"], 0);
    assert_eq!(body["day_passed"], false);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn completing_a_challenge_passes_the_day() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    ctx.server
        .post(&format!("/challenges/{}/complete", id))
        .authorization_bearer(&access_token)
        .await
        .assert_status(StatusCode::CREATED);

    ctx.server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .get("/profile/day")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["challenges_today"], 1);
    assert_eq!(body["replacements_today"], 1);
    assert_eq!(body["day_passed"], true);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn replacements_alone_do_not_pass_the_day() {
    let ctx = TestContext::new().await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    ctx.server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .get("/profile/day")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["challenges_today"], 0);
    assert_eq!(body["replacements_today"], 1);
    assert_eq!(body["day_passed"], false);

    ctx.cleanup().await;
}
