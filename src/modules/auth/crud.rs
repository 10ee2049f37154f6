use axum::http::StatusCode;
use chrono::{Duration, Utc};

use super::model::{AuthCode, User};
use crate::config::{is_duplicate_entry, DbPool};
use crate::services::identity::IdentityError;
use crate::services::jwt::TokenError;
use crate::services::quota::{lock_user_row, utc_day_bounds};

// =============================================================================
// AUTH ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid code")]
    InvalidCode,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unsupported provider")]
    UnsupportedProvider,

    #[error("Email claim missing from identity token")]
    MissingEmail,

    #[error("Identity provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("Revocation store unavailable: {0}")]
    RevocationUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCode => StatusCode::BAD_REQUEST,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UnsupportedProvider => StatusCode::BAD_REQUEST,
            Self::MissingEmail => StatusCode::BAD_REQUEST,
            // Authentication cannot proceed without the provider; hard fail.
            Self::ProviderUnreachable(_) => StatusCode::UNAUTHORIZED,
            Self::RevocationUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(_: TokenError) -> Self {
        AuthError::InvalidToken
    }
}

impl From<IdentityError> for AuthError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::UnsupportedProvider => AuthError::UnsupportedProvider,
            IdentityError::InvalidToken => AuthError::InvalidToken,
            IdentityError::MissingEmail => AuthError::MissingEmail,
            IdentityError::ProviderUnreachable(msg) => AuthError::ProviderUnreachable(msg),
        }
    }
}

// =============================================================================
// USER CRUD
// =============================================================================

pub struct UserCrud {
    pool: DbPool,
}

impl UserCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Idempotent upsert keyed on the unique email. A concurrent insert
    /// losing the race falls through to re-reading the winner's row.
    pub async fn get_or_create_by_email(&self, email: &str) -> Result<User, sqlx::Error> {
        if let Some(user) = self.find_by_email(email).await? {
            return Ok(user);
        }

        let inserted = sqlx::query("INSERT INTO users (email) VALUES (?)")
            .bind(email)
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => {}
            Err(e) if is_duplicate_entry(&e) => {}
            Err(e) => return Err(e),
        }

        self.find_by_email(email)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}

// =============================================================================
// AUTH CODE CRUD
// =============================================================================

pub struct AuthCrud {
    pool: DbPool,
    users: UserCrud,
}

impl AuthCrud {
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: UserCrud::new(pool.clone()),
            pool,
        }
    }

    pub fn users(&self) -> &UserCrud {
        &self.users
    }

    /// Resolve or create the user, then mint a fresh one-time code, at most
    /// once per user per UTC day. Count, delete and insert run in a single
    /// transaction behind the user's row lock, so two concurrent requests
    /// cannot both pass the daily check.
    pub async fn request_code(&self, email: &str, code_ttl_minutes: i64) -> Result<(), AuthError> {
        let user = self.users.get_or_create_by_email(email).await?;

        let (day_start, day_end) = utc_day_bounds(Utc::now().date_naive());

        let mut tx = self.pool.begin().await?;
        lock_user_row(&mut tx, user.id).await?;

        let (requested_today,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM auth_codes WHERE user_id = ? AND created_at >= ? AND created_at <= ?",
        )
        .bind(user.id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&mut *tx)
        .await?;

        if requested_today >= 1 {
            // Dropping the transaction rolls it back; no side effect remains.
            return Err(AuthError::RateLimited);
        }

        sqlx::query("DELETE FROM auth_codes WHERE user_id = ?")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        let code = AuthCode::generate();
        let expires_at = Utc::now() + Duration::minutes(code_ttl_minutes);

        sqlx::query("INSERT INTO auth_codes (user_id, code, expires_at) VALUES (?, ?, ?)")
            .bind(user.id)
            .bind(&code)
            .bind(expires_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Match an unexpired code for the user. The code is intentionally not
    /// deleted on success: it stays valid until expiry or the next request
    /// replaces it (documented reuse window).
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<User, AuthError> {
        let user = self.users.get_or_create_by_email(email).await?;

        let matched = sqlx::query_as::<_, AuthCode>(
            "SELECT * FROM auth_codes WHERE user_id = ? AND code = ? AND expires_at >= ?",
        )
        .bind(user.id)
        .bind(code)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        if matched.is_none() {
            return Err(AuthError::InvalidCode);
        }

        Ok(user)
    }
}
