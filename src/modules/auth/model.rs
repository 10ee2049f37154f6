use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub premium_until: Option<DateTime<Utc>>,
    // Legacy best-effort counters; the completion/replacement logs are
    // authoritative for quotas.
    pub replacements_count_today: i32,
    pub challenges_count_today: i32,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AuthCode {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AuthCode {
    /// One-time codes are random, never derived from the email address.
    pub fn generate() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    }
}
