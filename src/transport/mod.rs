//! Transport seam: one raw HTTP exchange per call.

mod hyper_transport;

pub use hyper_transport::HyperTransport;

use crate::client::ClientError;
use crate::http::Method;
use async_trait::async_trait;
use bytes::Bytes;

/// Everything the transport needs to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute target URL.
    pub url: String,
    /// `name: value` header lines joined by CRLF.
    pub header_block: String,
    /// Request body, absent when there is nothing to send.
    pub body: Option<Bytes>,
}

/// The undecoded result of an exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// Status line followed by one `Name: Value` line per header.
    pub header_lines: Vec<String>,
    /// Response body.
    pub body: Bytes,
}

/// Performs a single request/response exchange.
///
/// Implementations must not reuse connections between calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and return the raw status/header lines and body.
    async fn perform(&self, request: TransportRequest) -> Result<RawResponse, ClientError>;
}
