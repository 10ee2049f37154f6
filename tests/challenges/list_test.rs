use axum::http::StatusCode;
use serial_test::serial;

use crate::common::TestContext;

#[tokio::test]
#[serial]
async fn list_returns_seeded_challenges() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge("Take a short walk").await;
    ctx.seed_challenge("Drink a glass of water").await;

    let response = ctx.server.get("/challenges/").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 2);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn list_filters_by_category() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge_full("Stretch for five minutes", "movement", "small", false)
        .await;
    ctx.seed_challenge_full("Box breathing", "breath", "small", false)
        .await;

    let response = ctx.server.get("/challenges/?category=movement").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["category"], "movement");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn free_only_excludes_premium_challenges() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge_full("Free challenge", "mindset", "small", false)
        .await;
    ctx.seed_challenge_full("Premium challenge", "mindset", "small", true)
        .await;

    let response = ctx.server.get("/challenges/?free_only=true").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["is_premium_only"], false);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn text_search_matches_title() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge("Take a cold shower").await;
    ctx.seed_challenge("Call an old friend").await;

    let response = ctx.server.get("/challenges/?q=shower").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["title"], "Take a cold shower");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn get_by_id_returns_the_challenge() {
    let ctx = TestContext::new().await;
    let id = ctx.seed_challenge("Write down three good things").await;

    let response = ctx.server.get(&format!("/challenges/{}", id)).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Write down three good things");

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn get_unknown_challenge_is_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/challenges/999999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup().await;
}

#[tokio::test]
#[serial]
async fn random_respects_the_limit() {
    let ctx = TestContext::new().await;
    ctx.seed_challenge("First").await;
    ctx.seed_challenge("Second").await;
    ctx.seed_challenge("Third").await;

    let response = ctx.server.get("/challenges/random?limit=2").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 2);

    ctx.cleanup().await;
}
