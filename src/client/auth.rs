//! Bearer token acquisition.

use crate::client::ClientError;
use crate::http::{header_block, HttpResponse, Method};
use crate::transport::{Transport, TransportRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Obtains bearer tokens with a bodyless `OPTIONS` request.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn Transport>,
}

impl AuthClient {
    /// Create an auth client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Request a token from `url`.
    ///
    /// The returned payload is what callers treat as the token. Responses
    /// with a status in `[400, 600)` fail with [`ClientError::HttpStatus`].
    pub async fn authenticate(&self, url: &str) -> Result<HttpResponse, ClientError> {
        if url.is_empty() {
            return Err(ClientError::InvalidRequest(
                "auth URL must not be empty".to_string(),
            ));
        }

        let request = TransportRequest {
            method: Method::Options,
            url: url.to_string(),
            header_block: header_block(&auth_headers()),
            body: None,
        };

        debug!("Authenticating against {}", url);
        let raw = self.transport.perform(request).await?;
        let response = HttpResponse::from_raw(raw)?;

        if response.status.is_error() {
            warn!("Auth endpoint {} returned {}", url, response.status);
            return Err(ClientError::HttpStatus {
                code: response.status.0,
            });
        }

        Ok(response)
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient").finish_non_exhaustive()
    }
}

fn auth_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}
