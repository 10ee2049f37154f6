use axum::http::StatusCode;
use chrono::NaiveDate;

use super::model::Replacement;
use crate::config::DbPool;
use crate::services::quota::{lock_user_row, utc_day_bounds};

#[derive(Debug, thiserror::Error)]
pub enum ReplacementError {
    #[error("Daily limit exceeded")]
    DailyLimitExceeded,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ReplacementError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DailyLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct ReplacementCrud {
    pool: DbPool,
}

impl ReplacementCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Quota-gated write; same single-transaction shape as challenge
    /// completion: count and insert behind the user's row lock, rollback on
    /// denial.
    pub async fn create_with_limit(
        &self,
        user_id: i64,
        from_item: &str,
        to_item: &str,
        day: NaiveDate,
        daily_limit: i64,
    ) -> Result<Replacement, ReplacementError> {
        let (day_start, day_end) = utc_day_bounds(day);

        let mut tx = self.pool.begin().await?;
        lock_user_row(&mut tx, user_id).await?;

        let (count_today,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM replacements WHERE user_id = ? AND created_at >= ? AND created_at <= ?",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&mut *tx)
        .await?;

        if count_today >= daily_limit {
            return Err(ReplacementError::DailyLimitExceeded);
        }

        let inserted =
            sqlx::query("INSERT INTO replacements (user_id, from_item, to_item) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(from_item)
                .bind(to_item)
                .execute(&mut *tx)
                .await?;

        let replacement =
            sqlx::query_as::<_, Replacement>("SELECT * FROM replacements WHERE id = ?")
                .bind(inserted.last_insert_id() as i64)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(replacement)
    }

    pub async fn count_for_day(&self, user_id: i64, day: NaiveDate) -> Result<i64, sqlx::Error> {
        let (day_start, day_end) = utc_day_bounds(day);

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM replacements WHERE user_id = ? AND created_at >= ? AND created_at <= ?",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn list_for_period(
        &self,
        user_id: i64,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Replacement>, sqlx::Error> {
        let (start, _) = utc_day_bounds(date_from);
        let (_, end) = utc_day_bounds(date_to);

        sqlx::query_as::<_, Replacement>(
            r#"
            SELECT * FROM replacements
            WHERE user_id = ? AND created_at >= ? AND created_at <= ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
