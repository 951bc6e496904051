//! Two-step authenticated client: fetch a bearer token, then send the request.

pub mod auth;
pub mod config;
pub mod error;
pub mod request;
pub mod token;

pub use auth::AuthClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use request::RequestClient;
pub use token::{JsonFieldToken, RawBodyToken, TokenExtractor};
