use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn creating_requires_authentication() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/replacements/")
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn creating_a_replacement_returns_created() {
    let ctx = TestContext::new().await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["from_item"], "soda");
    assert_eq!(body["to_item"], "water");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn second_replacement_same_day_hits_the_daily_limit() {
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
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "chips", "to_item": "fruit" }))
        .await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn empty_from_item_is_rejected() {
    let ctx = TestContext::new().await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    let response = ctx
        .server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "", "to_item": "water" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn listing_covers_the_requested_period() {
    let ctx = TestContext::new().await;
    let (access_token, _) = ctx.authenticate(&test_email()).await;

    ctx.server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await
        .assert_status(StatusCode::CREATED);

    let today = Utc::now().date_naive();
    let response = ctx
        .server
        .get(&format!(
            "/replacements/?date_from={}&date_to={}",
            today, today
        ))
        .authorization_bearer(&access_token)
        .await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["from_item"], "soda");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn denied_replacement_leaves_no_row_behind() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let (access_token, _) = ctx.authenticate(&email).await;

    ctx.server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "soda", "to_item": "water" }))
        .await
        .assert_status(StatusCode::CREATED);

    ctx.server
        .post("/replacements/")
        .authorization_bearer(&access_token)
        .json(&json!({ "from_item": "chips", "to_item": "fruit" }))
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replacements WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    ctx.cleanup().await;
}
