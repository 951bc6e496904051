//! # authfetch - Bearer-authenticated HTTP requests
//!
//! `authfetch` performs a two-step exchange: it asks a token endpoint for a
//! bearer token with an `OPTIONS` request, then sends the caller's request
//! with an `Authorization: Bearer <token>` header and an optional JSON body.
//!
//! ## Flow
//!
//! ```text
//! caller ──► RequestClient::send
//!               │
//!               ├─► AuthClient::authenticate ──► OPTIONS <auth_url>
//!               │        (token = TokenExtractor::extract(response))
//!               │
//!               └─► <method> <url>  Authorization: Bearer <token>
//!                        │
//!                        ▼
//!                 RawResponse ──► HttpResponse
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use authfetch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ClientError> {
//!     let client = RequestClient::new(ClientConfig::new("https://auth.example.com/token"));
//!
//!     let request = RequestSpec::new(Method::Post, "https://api.example.com/items")
//!         .header("Content-Type", "application/json")
//!         .field("name", "widget")
//!         .field("count", 3);
//!
//!     let response = client.send(request).await?;
//!     println!("{} {}", response.status, response.text());
//!     Ok(())
//! }
//! ```
//!
//! Every call opens fresh connections and performs exactly two sequential
//! round trips. Nothing is retried or cached.

pub mod client;
pub mod http;
pub mod transport;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::client::{
        AuthClient, ClientConfig, ClientError, JsonFieldToken, RawBodyToken, RequestClient,
        TokenExtractor,
    };
    pub use crate::http::{HttpResponse, Method, RequestSpec, StatusCode};
    pub use crate::transport::{HyperTransport, RawResponse, Transport, TransportRequest};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use client::{AuthClient, ClientConfig, ClientError, RequestClient};
pub use http::{HttpResponse, Method, RequestSpec};
