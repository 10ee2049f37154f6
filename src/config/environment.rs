use std::env;

/// Environment configuration
/// Loaded and validated once at startup; the resulting struct is passed
/// explicitly into `create_app` (no ambient global).
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub port: u16,

    pub jwt_access_secret: String,
    pub jwt_refresh_secret: String,
    pub jwt_access_ttl_minutes: i64,
    pub jwt_refresh_ttl_days: i64,

    pub auth_code_ttl_minutes: i64,
    pub free_daily_challenges: i64,
    pub free_daily_replacements: i64,

    pub admin_token: String,
    pub google_client_id: Option<String>,
    pub apple_client_id: Option<String>,

    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());

        let jwt_access_secret = env::var("JWT_ACCESS_SECRET")
            .map_err(|_| "JWT_ACCESS_SECRET must be set".to_string())?;

        let jwt_refresh_secret = env::var("JWT_REFRESH_SECRET")
            .map_err(|_| "JWT_REFRESH_SECRET must be set".to_string())?;

        let admin_token = env::var("ADMIN_TOKEN")
            .map_err(|_| "ADMIN_TOKEN must be set".to_string())?;

        Ok(Self {
            database_url,
            redis_url,
            port: parse_var("PORT", 3000u16)?,
            jwt_access_secret,
            jwt_refresh_secret,
            jwt_access_ttl_minutes: parse_var("JWT_ACCESS_TTL_MINUTES", 60)?,
            jwt_refresh_ttl_days: parse_var("JWT_REFRESH_TTL_DAYS", 7)?,
            auth_code_ttl_minutes: parse_var("AUTH_CODE_TTL_MINUTES", 10)?,
            free_daily_challenges: parse_var("FREE_DAILY_CHALLENGES", 1)?,
            free_daily_replacements: parse_var("FREE_DAILY_REPLACEMENTS", 1)?,
            admin_token,
            google_client_id: env::var("GOOGLE_CLIENT_ID").ok(),
            apple_client_id: env::var("APPLE_CLIENT_ID").ok(),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 50)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("{} is not a valid value", name)),
        Err(_) => Ok(default),
    }
}
