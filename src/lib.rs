pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::{environment::Config, DbPool};
use modules::activity::activity_routes;
use modules::admin::admin_routes;
use modules::auth::auth_routes;
use modules::challenge::challenge_routes;
use modules::meta::meta_routes;
use modules::profile::profile_routes;
use modules::replacement::replacement_routes;
use services::identity::IdentityVerifier;
use services::jwt::TokenService;
use services::quota::QuotaLimits;
use services::rate_limit::{create_rate_limiter, RateLimitLayer};
use services::revocation::RevocationStore;
use services::security::security_headers;

pub struct AppState {
    pub db: DbPool,
    pub tokens: TokenService,
    pub revocation: RevocationStore,
    pub identity: IdentityVerifier,
    pub quota: QuotaLimits,
    pub admin_token: String,
    pub auth_code_ttl_minutes: i64,
}

pub async fn create_app(db: DbPool, revocation: RevocationStore, config: &Config) -> Router {
    let tokens = TokenService::new(
        config.jwt_access_secret.clone(),
        config.jwt_refresh_secret.clone(),
        config.jwt_access_ttl_minutes,
        config.jwt_refresh_ttl_days,
    );

    let identity = IdentityVerifier::new(
        reqwest::Client::new(),
        config.google_client_id.clone(),
        config.apple_client_id.clone(),
    );

    let state = Arc::new(AppState {
        db,
        tokens,
        revocation,
        identity,
        quota: QuotaLimits {
            completions_per_day: config.free_daily_challenges,
            replacements_per_day: config.free_daily_replacements,
        },
        admin_token: config.admin_token.clone(),
        auth_code_ttl_minutes: config.auth_code_ttl_minutes,
    });

    // Rate limit: sustained 1/s with a configurable burst
    let rate_limiter = create_rate_limiter(config.rate_limit_burst);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/auth", auth_routes())
        .nest("/challenges", challenge_routes())
        .nest("/replacements", replacement_routes())
        .nest("/activity", activity_routes())
        .nest("/profile", profile_routes())
        .nest("/meta", meta_routes())
        .nest("/admin", admin_routes(state.clone()))
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(RateLimitLayer::new(rate_limiter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Something New API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
