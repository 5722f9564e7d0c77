//! Static API-key gate.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::{ApiKeyConfig, ConfigError};

/// Checks requests for the configured shared secret.
///
/// Only the SHA-256 digest of the expected key is retained; presented keys are
/// hashed before comparison.
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    header: HeaderName,
    expected_digest: Vec<u8>,
}

/// Reasons a request fails the API-key check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyRejection {
    /// The key header was absent.
    #[error("API Key is missing")]
    Missing,
    /// The key header did not carry the expected key.
    #[error("Unauthorized client")]
    Invalid,
}

impl ApiKeyGate {
    /// Builds a gate from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] when the configured header
    /// is not a valid HTTP header name.
    pub fn new(config: &ApiKeyConfig) -> Result<Self, ConfigError> {
        let header = HeaderName::from_bytes(config.header_name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName(config.header_name.clone()))?;
        Ok(Self {
            header,
            expected_digest: Sha256::digest(config.key.as_bytes()).to_vec(),
        })
    }

    /// Returns the header consulted for the key.
    #[must_use]
    pub const fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Checks request headers for the expected key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiKeyRejection::Missing`] when the header is absent and
    /// [`ApiKeyRejection::Invalid`] when it carries any other value.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiKeyRejection> {
        let Some(presented) = headers.get(&self.header) else {
            return Err(ApiKeyRejection::Missing);
        };
        let presented_digest = Sha256::digest(presented.as_bytes());
        if presented_digest.as_slice() != self.expected_digest.as_slice() {
            return Err(ApiKeyRejection::Invalid);
        }
        Ok(())
    }
}

impl IntoResponse for ApiKeyRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

/// Middleware rejecting requests that lack the configured API key.
pub async fn require_api_key(
    State(gate): State<Arc<ApiKeyGate>>,
    request: Request,
    next: Next,
) -> Response {
    match gate.check(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            match rejection {
                ApiKeyRejection::Missing => {
                    tracing::warn!(header = %gate.header(), "API key was not provided");
                }
                ApiKeyRejection::Invalid => tracing::warn!("unauthorized API key attempt"),
            }
            rejection.into_response()
        }
    }
}
