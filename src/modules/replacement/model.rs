use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Append-only habit-substitution log ("swap X for Y").
#[derive(Debug, Clone, FromRow)]
pub struct Replacement {
    pub id: i64,
    pub user_id: i64,
    pub from_item: String,
    pub to_item: String,
    pub created_at: DateTime<Utc>,
}
