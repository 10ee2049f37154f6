use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;

const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const APPLE_JWKS_URL: &str = "https://appleid.apple.com/auth/keys";
const APPLE_ISSUER: &str = "https://appleid.apple.com";

/// Outbound verification calls are bounded; a slow provider maps to an
/// authentication failure, never to a silent fallback.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Apple,
}

impl Provider {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "google" => Some(Self::Google),
            "apple" => Some(Self::Apple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Unsupported provider")]
    UnsupportedProvider,

    #[error("Invalid identity token")]
    InvalidToken,

    #[error("Email claim missing from identity token")]
    MissingEmail,

    #[error("Identity provider unreachable: {0}")]
    ProviderUnreachable(String),
}

#[derive(Debug, Deserialize)]
struct Jwks {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct IdentityClaims {
    sub: String,
    email: Option<String>,
}

#[derive(Debug)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub email: String,
}

/// Verifies externally-issued identity tokens (Google/Apple) against the
/// provider's published keys, fetched at request time and matched by key id.
pub struct IdentityVerifier {
    http: reqwest::Client,
    google_client_id: Option<String>,
    apple_client_id: Option<String>,
}

impl IdentityVerifier {
    pub fn new(
        http: reqwest::Client,
        google_client_id: Option<String>,
        apple_client_id: Option<String>,
    ) -> Self {
        Self {
            http,
            google_client_id,
            apple_client_id,
        }
    }

    pub async fn verify(
        &self,
        provider: Provider,
        id_token: &str,
    ) -> Result<VerifiedIdentity, IdentityError> {
        let header = decode_header(id_token).map_err(|_| IdentityError::InvalidToken)?;
        let kid = header.kid.ok_or(IdentityError::InvalidToken)?;

        let (jwks_url, audience) = match provider {
            Provider::Google => (GOOGLE_JWKS_URL, self.google_client_id.as_deref()),
            Provider::Apple => (APPLE_JWKS_URL, self.apple_client_id.as_deref()),
        };

        let jwks = self.fetch_jwks(jwks_url).await?;
        let jwk = jwks
            .keys
            .iter()
            .find(|key| key.kid == kid)
            .ok_or(IdentityError::InvalidToken)?;

        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|_| IdentityError::InvalidToken)?;

        let mut validation = Validation::new(Algorithm::RS256);
        match provider {
            Provider::Google => {
                validation.set_issuer(&["https://accounts.google.com", "accounts.google.com"]);
            }
            Provider::Apple => {
                validation.set_issuer(&[APPLE_ISSUER]);
            }
        }
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        let data = decode::<IdentityClaims>(id_token, &key, &validation)
            .map_err(|_| IdentityError::InvalidToken)?;

        let email = data.claims.email.ok_or(IdentityError::MissingEmail)?;

        Ok(VerifiedIdentity {
            subject: data.claims.sub,
            email,
        })
    }

    async fn fetch_jwks(&self, url: &str) -> Result<Jwks, IdentityError> {
        let response = self
            .http
            .get(url)
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await
            .map_err(|e| IdentityError::ProviderUnreachable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| IdentityError::ProviderUnreachable(e.to_string()))?;

        response
            .json::<Jwks>()
            .await
            .map_err(|e| IdentityError::ProviderUnreachable(e.to_string()))
    }
}
