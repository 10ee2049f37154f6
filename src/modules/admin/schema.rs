use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResetTodayResponse {
    pub message: &'static str,
    pub deleted_activities: u64,
}
