//! Decoded HTTP response returned to callers.

use crate::client::ClientError;
use crate::http::{parse_headers, parse_status_code};
use crate::transport::RawResponse;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    pub const BAD_GATEWAY: StatusCode = StatusCode(502);

    /// Check if the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Check if the status code indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Check if the status code indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Check if the status code is one the client reports as a failure.
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.0)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured response: status, raw body and trimmed headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body, undecoded.
    pub payload: Bytes,
    /// Response headers; the last occurrence of a repeated name wins.
    ///
    /// Names are stored as the transport reports them. [`HyperTransport`]
    /// lowercases them (`content-type`), so prefer [`HttpResponse::get_header`]
    /// over exact key lookups.
    ///
    /// [`HyperTransport`]: crate::transport::HyperTransport
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Decode a raw transport exchange.
    pub fn from_raw(raw: RawResponse) -> Result<Self, ClientError> {
        let status = parse_status_code(&raw.header_lines)?;
        let headers = parse_headers(&raw.header_lines);
        Ok(Self {
            status: StatusCode(status),
            payload: raw.body,
            headers,
        })
    }

    /// Get a header value, ignoring ASCII case in the name.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.get(name).or_else(|| {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    /// Get the body as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).to_string()
    }

    /// Parse the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}
