use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::Replacement;

#[derive(Debug, Deserialize, Validate)]
pub struct ReplacementCreateRequest {
    #[validate(length(min = 1, max = 120))]
    pub from_item: String,
    #[validate(length(min = 1, max = 120))]
    pub to_item: String,
}

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ReplacementResponse {
    pub id: i64,
    pub from_item: String,
    pub to_item: String,
    pub created_at: DateTime<Utc>,
}

impl From<Replacement> for ReplacementResponse {
    fn from(replacement: Replacement) -> Self {
        Self {
            id: replacement.id,
            from_item: replacement.from_item,
            to_item: replacement.to_item,
            created_at: replacement.created_at,
        }
    }
}
