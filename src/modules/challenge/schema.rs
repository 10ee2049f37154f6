use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::{Challenge, ChallengeCompletion};

// =============================================================================
// LISTING
// =============================================================================

fn default_list_limit() -> i64 {
    50
}

fn default_random_limit() -> i64 {
    5
}

#[derive(Debug, Deserialize)]
pub struct ChallengeListQuery {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub category: Option<String>,
    pub size: Option<String>,
    pub q: Option<String>,
    #[serde(default)]
    pub free_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct RandomChallengeQuery {
    #[serde(default = "default_random_limit")]
    pub limit: i64,
    pub category: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub free_only: bool,
}

#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
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

impl From<Challenge> for ChallengeResponse {
    fn from(challenge: Challenge) -> Self {
        Self {
            id: challenge.id,
            title: challenge.title,
            short_description: challenge.short_description,
            category: challenge.category,
            tags: challenge.tags,
            size: challenge.size,
            estimated_duration_min: challenge.estimated_duration_min,
            is_premium_only: challenge.is_premium_only,
            created_at: challenge.created_at,
            updated_at: challenge.updated_at,
        }
    }
}

// =============================================================================
// COMPLETIONS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub id: i64,
    pub challenge_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ChallengeCompletion> for CompletionResponse {
    fn from(completion: ChallengeCompletion) -> Self {
        Self {
            id: completion.id,
            challenge_id: completion.challenge_id,
            created_at: completion.created_at,
        }
    }
}

// =============================================================================
// ADMIN EDITS
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct ChallengeCreateRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 500))]
    pub short_description: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(length(max = 200))]
    pub tags: Option<String>,
    #[serde(default = "default_size")]
    pub size: String,
    pub estimated_duration_min: Option<i32>,
    #[serde(default)]
    pub is_premium_only: bool,
}

fn default_size() -> String {
    "small".to_string()
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChallengeUpdateRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 500))]
    pub short_description: Option<String>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(length(max = 200))]
    pub tags: Option<String>,
    pub size: Option<String>,
    pub estimated_duration_min: Option<i32>,
    pub is_premium_only: Option<bool>,
}
