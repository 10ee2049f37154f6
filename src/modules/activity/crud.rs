use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::config::{is_duplicate_entry, DbPool};
use crate::services::quota::utc_day_bounds;

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Direction must be 'left' or 'right'")]
    InvalidDirection,

    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDirection => StatusCode::BAD_REQUEST,
            Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// ACTIVITY CRUD
// =============================================================================

pub struct ActivityCrud {
    pool: DbPool,
}

impl ActivityCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn track_swipe(
        &self,
        user_id: i64,
        challenge_id: i64,
        direction: &str,
    ) -> Result<(), ActivityError> {
        if direction != "left" && direction != "right" {
            return Err(ActivityError::InvalidDirection);
        }

        self.insert(user_id, &format!("swipe_{}", direction), challenge_id)
            .await?;
        Ok(())
    }

    /// Views are recorded once per (user, challenge).
    pub async fn track_view(&self, user_id: i64, challenge_id: i64) -> Result<(), ActivityError> {
        if !self.has_activity(user_id, challenge_id, "view").await? {
            self.insert(user_id, "view", challenge_id).await?;
        }
        Ok(())
    }

    /// Selections are recorded once per (user, challenge).
    pub async fn track_selection(
        &self,
        user_id: i64,
        challenge_id: i64,
    ) -> Result<(), ActivityError> {
        if !self.has_activity(user_id, challenge_id, "select").await? {
            self.insert(user_id, "select", challenge_id).await?;
        }
        Ok(())
    }

    pub async fn count_swipes_today(
        &self,
        user_id: i64,
        day: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let (day_start, day_end) = utc_day_bounds(day);

        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM user_activities
            WHERE user_id = ? AND activity_type IN ('swipe_left', 'swipe_right')
              AND created_at >= ? AND created_at <= ?
            "#,
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn viewed_challenges(&self, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.distinct_challenges(user_id, "view").await
    }

    pub async fn selected_challenges(&self, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        self.distinct_challenges(user_id, "select").await
    }

    pub async fn delete_for_day(&self, day: NaiveDate) -> Result<u64, sqlx::Error> {
        let (day_start, day_end) = utc_day_bounds(day);

        let result =
            sqlx::query("DELETE FROM user_activities WHERE created_at >= ? AND created_at <= ?")
                .bind(day_start)
                .bind(day_end)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn insert(
        &self,
        user_id: i64,
        activity_type: &str,
        challenge_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_activities (user_id, activity_type, challenge_id) VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(activity_type)
        .bind(challenge_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn has_activity(
        &self,
        user_id: i64,
        challenge_id: i64,
        activity_type: &str,
    ) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT id FROM user_activities
            WHERE user_id = ? AND challenge_id = ? AND activity_type = ?
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(challenge_id)
        .bind(activity_type)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }

    async fn distinct_challenges(
        &self,
        user_id: i64,
        activity_type: &str,
    ) -> Result<Vec<i64>, sqlx::Error> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT DISTINCT challenge_id FROM user_activities WHERE user_id = ? AND activity_type = ?",
        )
        .bind(user_id)
        .bind(activity_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}

// =============================================================================
// FAVORITE CRUD
// =============================================================================

pub struct FavoriteCrud {
    pool: DbPool,
}

impl FavoriteCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The unique (user_id, challenge_id) index makes re-favoriting a no-op
    /// rather than a second row.
    pub async fn add(&self, user_id: i64, challenge_id: i64) -> Result<(), ActivityError> {
        let inserted =
            sqlx::query("INSERT INTO user_favorites (user_id, challenge_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(challenge_id)
                .execute(&self.pool)
                .await;

        match inserted {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_entry(&e) => Ok(()),
            Err(e) => Err(ActivityError::Database(e)),
        }
    }

    pub async fn remove(&self, user_id: i64, challenge_id: i64) -> Result<(), ActivityError> {
        let result = sqlx::query("DELETE FROM user_favorites WHERE user_id = ? AND challenge_id = ?")
            .bind(user_id)
            .bind(challenge_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ActivityError::FavoriteNotFound);
        }
        Ok(())
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT challenge_id FROM user_favorites WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
