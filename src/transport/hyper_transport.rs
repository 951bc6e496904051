//! Transport backed by hyper with a rustls HTTPS connector.

use super::{RawResponse, Transport, TransportRequest};
use crate::client::ClientError;
use crate::http::parse_headers;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::Request;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;
use tracing::debug;

type HyperClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// hyper-based [`Transport`].
///
/// Every exchange builds its own client and connection; nothing is pooled.
#[derive(Debug, Clone, Default)]
pub struct HyperTransport {
    timeout: Option<Duration>,
}

impl HyperTransport {
    /// Create a transport without a timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that bounds each exchange by `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn exchange(&self, request: TransportRequest) -> Result<RawResponse, ClientError> {
        let uri: hyper::Uri = request.url.parse().map_err(|e| {
            ClientError::InvalidRequest(format!("invalid URL '{}': {}", request.url, e))
        })?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(ClientError::InvalidRequest(format!(
                "URL '{}' is not absolute",
                request.url
            )));
        }

        let mut builder = Request::builder()
            .method(hyper::Method::from(request.method))
            .uri(uri);

        let lines: Vec<&str> = request.header_block.split("\r\n").collect();
        for (name, value) in parse_headers(&lines) {
            builder = builder.header(name, value);
        }

        let req = builder
            .body(Full::new(request.body.unwrap_or_default()))
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        let response = build_client().request(req).await?;
        let (parts, body) = response.into_parts();

        let mut header_lines = Vec::with_capacity(parts.headers.len() + 1);
        header_lines.push(status_line(parts.version, parts.status));
        for (name, value) in parts.headers.iter() {
            header_lines.push(format!(
                "{}: {}",
                name,
                String::from_utf8_lossy(value.as_bytes())
            ));
        }

        let body = body.collect().await?.to_bytes();

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            parts.status.as_u16(),
            body.len()
        );

        Ok(RawResponse { header_lines, body })
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn perform(&self, request: TransportRequest) -> Result<RawResponse, ClientError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(request))
                .await
                .map_err(|_| {
                    ClientError::Transport(format!("request timed out after {:?}", limit))
                })?,
            None => self.exchange(request).await,
        }
    }
}

fn build_client() -> HyperClient {
    if rustls::crypto::CryptoProvider::get_default().is_none() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    let https = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();

    Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(0)
        .build(https)
}

fn status_line(version: hyper::Version, status: hyper::StatusCode) -> String {
    let line = format!(
        "{:?} {} {}",
        version,
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    );
    line.trim_end().to_string()
}
