use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Content item browsed and completed by users. Category, size and tags are
/// loosely-coupled free text; they are never foreign keys into the
/// vocabulary tables.
#[derive(Debug, Clone, FromRow)]
pub struct Challenge {
    pub id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub size: String,
    pub estimated_duration_min: Option<i32>,
    pub is_premium_only: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Append-only completion log; existence of a row for "today" is what the
/// quota gate counts.
#[derive(Debug, Clone, FromRow)]
pub struct ChallengeCompletion {
    pub id: i64,
    pub user_id: i64,
    pub challenge_id: i64,
    pub created_at: DateTime<Utc>,
}
