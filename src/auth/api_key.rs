use async_trait::async_trait;
use axum::extract::{FromRequest, RequestParts};

use crate::error::{unauthorized_error, unexpected_error, Error};

/// Header carrying the shared secret. Header names are case-insensitive, so
/// clients may send it as `API-KEY`.
pub const API_KEY_HEADER: &str = "api-key";

/// Shared-secret gate, either off or guarding with a single key.
#[derive(Clone)]
pub struct AuthGate {
    api_key: Option<String>,
}

impl AuthGate {
    pub fn disabled() -> Self {
        Self { api_key: None }
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn check(&self, presented: Option<&str>) -> Result<(), Error> {
        let expected = match &self.api_key {
            Some(api_key) => api_key,
            None => return Ok(()),
        };

        match presented {
            Some(presented) if presented == expected => Ok(()),
            Some(_) => {
                tracing::warn!("rejected request with wrong API key");
                Err(unauthorized_error())
            }
            None => {
                tracing::warn!("rejected request without API key");
                Err(unauthorized_error())
            }
        }
    }
}

// keeps the secret out of logs
impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Extractor that succeeds only when the request passes the [`AuthGate`]
/// installed as an extension. Must come before any body extractor.
#[derive(Debug, Clone, Copy)]
pub struct Authorized;

#[async_trait]
impl<B: Send> FromRequest<B> for Authorized {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let gate = req
            .extensions()
            .get::<AuthGate>()
            .ok_or_else(|| unexpected_error("auth gate is not installed"))?;

        let presented = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        gate.check(presented)?;

        Ok(Authorized)
    }
}
