use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub challenge_id: i64,
    pub direction: String, // "left" or "right"
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub challenge_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub challenge_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub challenge_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct ViewedResponse {
    pub viewed: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct SelectedResponse {
    pub selected: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct SwipesTodayResponse {
    pub swipes_today: i64,
}
