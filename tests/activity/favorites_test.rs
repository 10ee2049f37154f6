use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn added_favorite_appears_in_the_list() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .post("/activity/favorite")
        .authorization_bearer(&access_token)
        .json(&json!({ "challenge_id": id }))
        .await;
    response.assert_status_ok();

    let response = ctx
        .server
        .get("/activity/favorites")
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["favorites"], json!([id]));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn adding_the_same_favorite_twice_is_idempotent() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    for _ in 0..2 {
        let response = ctx
            .server
            .post("/activity/favorite")
            .authorization_bearer(&access_token)
            .json(&json!({ "challenge_id": id }))
            .await;
        response.assert_status_ok();
    }

    let response = ctx
        .server
        .get("/activity/favorites")
        .authorization_bearer(&access_token)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["favorites"], json!([id]));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn removed_favorite_disappears_from_the_list() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    ctx.server
        .post("/activity/favorite")
        .authorization_bearer(&access_token)
        .json(&json!({ "challenge_id": id }))
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .delete(&format!("/activity/favorite/{}", id))
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let response = ctx
        .server
        .get("/activity/favorites")
        .authorization_bearer(&access_token)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["favorites"], json!([]));

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn removing_a_missing_favorite_is_not_found() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Take a short walk").await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .delete(&format!("/activity/favorite/{}", id))
        .authorization_bearer(&access_token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}
