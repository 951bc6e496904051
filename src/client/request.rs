//! Authenticate-then-request client.

use crate::client::{AuthClient, ClientConfig, ClientError, RawBodyToken, TokenExtractor};
use crate::http::{header_block, validate_header, HttpResponse, RequestSpec};
use crate::transport::{HyperTransport, Transport, TransportRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Header the client injects the bearer token into.
pub const AUTHORIZATION: &str = "Authorization";

/// Client performing the two-step flow: `OPTIONS` the auth endpoint for a
/// token, then send the caller's request with `Authorization: Bearer <token>`.
///
/// Each call makes exactly two sequential round trips and keeps no state
/// between calls.
pub struct RequestClient {
    config: ClientConfig,
    auth: AuthClient,
    transport: Arc<dyn Transport>,
    extractor: Arc<dyn TokenExtractor>,
}

impl RequestClient {
    /// Create a client using the hyper transport.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(HyperTransport::with_timeout(config.timeout()));
        Self::with_transport(config, transport)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            auth: AuthClient::new(transport.clone()),
            config,
            transport,
            extractor: Arc::new(RawBodyToken),
        }
    }

    /// Replace the token extraction strategy (default: [`RawBodyToken`]).
    pub fn token_extractor(mut self, extractor: impl TokenExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send the request, failing with [`ClientError::HttpStatus`] when the
    /// target answers with a status in `[400, 600)`. The body of such a
    /// response is discarded; use [`RequestClient::fetch`] to keep it.
    pub async fn send(&self, request: RequestSpec) -> Result<HttpResponse, ClientError> {
        let response = self.fetch(request).await?;
        if response.status.is_error() {
            warn!("Request failed with status {}", response.status);
            return Err(ClientError::HttpStatus {
                code: response.status.0,
            });
        }
        Ok(response)
    }

    /// Send the request and return the target's response whatever its status.
    ///
    /// Transport, auth and decoding failures are still errors.
    pub async fn fetch(&self, mut request: RequestSpec) -> Result<HttpResponse, ClientError> {
        // Encode first so a bad payload never reaches the network.
        let body = request.encode_body()?;

        let auth_response = self.auth.authenticate(&self.config.auth_url).await?;
        let token = self.extractor.extract(&auth_response)?;
        if token.contains(['\r', '\n']) {
            return Err(ClientError::Token(
                "bearer token contains a line break".to_string(),
            ));
        }

        let mut headers = request.headers;
        headers.retain(|name, _| !name.eq_ignore_ascii_case(AUTHORIZATION));
        for (name, value) in &headers {
            validate_header(name, value)?;
        }
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));

        let transport_request = TransportRequest {
            method: request.method,
            url: request.url,
            header_block: header_block(&headers),
            body,
        };

        debug!(
            "Sending {} {} ({} headers, body: {})",
            transport_request.method,
            transport_request.url,
            headers.len(),
            transport_request.body.as_ref().map_or(0, |b| b.len())
        );

        let method = transport_request.method;
        let raw = self.transport.perform(transport_request).await?;
        let response = HttpResponse::from_raw(raw)?;

        info!("{} completed with status {}", method, response.status);
        Ok(response)
    }
}

impl std::fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
