use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// REQUEST CODE
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// =============================================================================
// VERIFY
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

// =============================================================================
// REFRESH
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// =============================================================================
// ME (Current User)
// =============================================================================

#[derive(Debug, Serialize)]
pub struct MeUser {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: MeUser,
}

// =============================================================================
// THIRD-PARTY LOGIN
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct OauthLoginRequest {
    pub provider: String,
    pub id_token: String,
}

#[derive(Debug, Serialize)]
pub struct OauthUserResponse {
    pub id: i64,
    pub email: String,
    pub provider: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OauthTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct OauthLoginResponse {
    pub user: OauthUserResponse,
    pub tokens: OauthTokensResponse,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

}
