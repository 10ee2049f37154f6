use axum::http::StatusCode;
use chrono::NaiveDate;
use sqlx::QueryBuilder;

use super::model::{Challenge, ChallengeCompletion};
use super::schema::{ChallengeCreateRequest, ChallengeListQuery, ChallengeUpdateRequest, RandomChallengeQuery};
use crate::config::{is_duplicate_entry, DbPool};
use crate::services::quota::{lock_user_row, utc_day_bounds};

const VALID_SIZES: [&str; 3] = ["small", "medium", "large"];

// =============================================================================
// CHALLENGE ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("Challenge not found")]
    NotFound,

    #[error("Daily limit exceeded")]
    DailyLimitExceeded,

    #[error("Title already exists")]
    TitleExists,

    #[error("Size must be one of small, medium, large")]
    InvalidSize,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ChallengeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DailyLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::TitleExists => StatusCode::CONFLICT,
            Self::InvalidSize => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// CHALLENGE CRUD
// =============================================================================

pub struct ChallengeCrud {
    pool: DbPool,
}

impl ChallengeCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &ChallengeListQuery) -> Result<Vec<Challenge>, ChallengeError> {
        let limit = query.limit.clamp(1, 100);
        let offset = query.offset.max(0);

        let mut qb = QueryBuilder::new("SELECT * FROM challenges WHERE 1=1");
        if let Some(category) = &query.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(size) = &query.size {
            qb.push(" AND size = ").push_bind(size);
        }
        if let Some(q) = &query.q {
            let like = format!("%{}%", q);
            qb.push(" AND (title LIKE ")
                .push_bind(like.clone())
                .push(" OR short_description LIKE ")
                .push_bind(like)
                .push(")");
        }
        if query.free_only {
            qb.push(" AND is_premium_only = FALSE");
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let challenges = qb
            .build_query_as::<Challenge>()
            .fetch_all(&self.pool)
            .await?;
        Ok(challenges)
    }

    pub async fn get_random(
        &self,
        query: &RandomChallengeQuery,
    ) -> Result<Vec<Challenge>, ChallengeError> {
        let limit = query.limit.clamp(1, 20);

        let mut qb = QueryBuilder::new("SELECT * FROM challenges WHERE 1=1");
        if let Some(category) = &query.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(size) = &query.size {
            qb.push(" AND size = ").push_bind(size);
        }
        if query.free_only {
            qb.push(" AND is_premium_only = FALSE");
        }
        qb.push(" ORDER BY RAND() LIMIT ").push_bind(limit);

        let challenges = qb
            .build_query_as::<Challenge>()
            .fetch_all(&self.pool)
            .await?;
        Ok(challenges)
    }

    pub async fn get_by_id(&self, challenge_id: i64) -> Result<Option<Challenge>, ChallengeError> {
        let challenge = sqlx::query_as::<_, Challenge>("SELECT * FROM challenges WHERE id = ?")
            .bind(challenge_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(challenge)
    }

    pub async fn create(&self, req: &ChallengeCreateRequest) -> Result<Challenge, ChallengeError> {
        if !VALID_SIZES.contains(&req.size.as_str()) {
            return Err(ChallengeError::InvalidSize);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO challenges (title, short_description, category, tags, size, estimated_duration_min, is_premium_only)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&req.title)
        .bind(&req.short_description)
        .bind(&req.category)
        .bind(&req.tags)
        .bind(&req.size)
        .bind(req.estimated_duration_min)
        .bind(req.is_premium_only)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_duplicate_entry(&e) {
                ChallengeError::TitleExists
            } else {
                ChallengeError::Database(e)
            }
        })?;

        let id = inserted.last_insert_id() as i64;
        self.get_by_id(id).await?.ok_or(ChallengeError::NotFound)
    }

    /// Explicit admin edit; the only mutation path for an existing challenge.
    pub async fn update(
        &self,
        challenge_id: i64,
        req: &ChallengeUpdateRequest,
    ) -> Result<Challenge, ChallengeError> {
        if let Some(size) = &req.size {
            if !VALID_SIZES.contains(&size.as_str()) {
                return Err(ChallengeError::InvalidSize);
            }
        }

        let existing = self
            .get_by_id(challenge_id)
            .await?
            .ok_or(ChallengeError::NotFound)?;

        sqlx::query(
            r#"
            UPDATE challenges
            SET title = ?, short_description = ?, category = ?, tags = ?, size = ?, estimated_duration_min = ?, is_premium_only = ?
            WHERE id = ?
            "#,
        )
        .bind(req.title.as_ref().unwrap_or(&existing.title))
        .bind(req.short_description.as_ref().or(existing.short_description.as_ref()))
        .bind(req.category.as_ref().or(existing.category.as_ref()))
        .bind(req.tags.as_ref().or(existing.tags.as_ref()))
        .bind(req.size.as_ref().unwrap_or(&existing.size))
        .bind(req.estimated_duration_min.or(existing.estimated_duration_min))
        .bind(req.is_premium_only.unwrap_or(existing.is_premium_only))
        .bind(challenge_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_duplicate_entry(&e) {
                ChallengeError::TitleExists
            } else {
                ChallengeError::Database(e)
            }
        })?;

        self.get_by_id(challenge_id)
            .await?
            .ok_or(ChallengeError::NotFound)
    }
}

// =============================================================================
// COMPLETION CRUD
// =============================================================================

pub struct CompletionCrud {
    pool: DbPool,
}

impl CompletionCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Quota-gated write: the daily-count check and the log insert commit as
    /// one atomic unit behind the user's row lock. Denial rolls back and
    /// leaves zero rows; approval leaves exactly one.
    pub async fn complete_with_limit(
        &self,
        user_id: i64,
        challenge_id: i64,
        day: NaiveDate,
        daily_limit: i64,
    ) -> Result<ChallengeCompletion, ChallengeError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM challenges WHERE id = ?")
            .bind(challenge_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(ChallengeError::NotFound);
        }

        let (day_start, day_end) = utc_day_bounds(day);

        let mut tx = self.pool.begin().await?;
        lock_user_row(&mut tx, user_id).await?;

        let (count_today,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM challenge_completions WHERE user_id = ? AND created_at >= ? AND created_at <= ?",
        )
        .bind(user_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&mut *tx)
        .await?;

        if count_today >= daily_limit {
            return Err(ChallengeError::DailyLimitExceeded);
        }

        let inserted =
            sqlx::query("INSERT INTO challenge_completions (user_id, challenge_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(challenge_id)
                .execute(&mut *tx)
                .await?;

        let completion = sqlx::query_as::<_, ChallengeCompletion>(
            "SELECT * FROM challenge_completions WHERE id = ?",
        )
        .bind(inserted.last_insert_id() as i64)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(completion)
    }

    pub async fn count_for_day(&self, user_id: i64, day: NaiveDate) -> Result<i64, sqlx::Error> {
        let (day_start, day_end) = utc_day_bounds(day);

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM challenge_completions WHERE user_id = ? AND created_at >= ? AND created_at <= ?",
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
    ) -> Result<Vec<ChallengeCompletion>, sqlx::Error> {
        let (start, _) = utc_day_bounds(date_from);
        let (_, end) = utc_day_bounds(date_to);

        sqlx::query_as::<_, ChallengeCompletion>(
            r#"
            SELECT * FROM challenge_completions
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
