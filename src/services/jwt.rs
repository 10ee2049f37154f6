use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by both token classes. The issued-at value doubles as the
/// revocation nonce, so no random claim content is added.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: i64,    // issued at, also the revocation identifier
    pub exp: i64,    // expiration time
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,

    #[error("Token expired")]
    Expired,
}

/// Issues and verifies access and refresh tokens. The two classes are signed
/// with distinct secrets, so a refresh token never validates as an access
/// token or vice versa.
pub struct TokenService {
    access_secret: String,
    refresh_secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(
        access_secret: String,
        refresh_secret: String,
        access_ttl_minutes: i64,
        refresh_ttl_days: i64,
    ) -> Self {
        Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::minutes(access_ttl_minutes),
            refresh_ttl: Duration::days(refresh_ttl_days),
        }
    }

    pub fn issue_access(&self, user_id: i64) -> Result<String, TokenError> {
        issue(user_id, &self.access_secret, self.access_ttl)
    }

    pub fn issue_refresh(&self, user_id: i64) -> Result<String, TokenError> {
        issue(user_id, &self.refresh_secret, self.refresh_ttl)
    }

    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        verify(token, &self.access_secret)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        verify(token, &self.refresh_secret)
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl.num_seconds()
    }
}

fn issue(user_id: i64, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = now + ttl;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
