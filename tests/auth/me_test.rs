use axum::http::StatusCode;
use serial_test::serial;

use crate::common::{test_email, TestContext};

#[tokio::test]
#[serial]
async fn me_returns_the_authenticated_user_id() {
    let ctx = TestContext::new().await;
    let email = test_email();
    let (access_token, _) = ctx.authenticate(&email).await;

    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_one(&ctx.db)
        .await
        .unwrap();

    let response = ctx
        .server
        .get("/auth/me")
        .authorization_bearer(&access_token)
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["id"], user_id);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn me_without_token_is_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn me_with_invalid_token_is_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/auth/me")
        .authorization_bearer("invalid-token")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup().await;
}
