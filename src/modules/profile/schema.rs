use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DayProgressResponse {
    pub challenges_today: i64,
    pub replacements_today: i64,
    pub day_passed: bool,
}
