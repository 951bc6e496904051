//! Strategies for reading the bearer token out of an auth response.

use crate::client::ClientError;
use crate::http::HttpResponse;
use serde_json::Value;

/// Turns an auth response into a bearer token.
pub trait TokenExtractor: Send + Sync {
    /// Extract the token.
    fn extract(&self, response: &HttpResponse) -> Result<String, ClientError>;
}

impl<F> TokenExtractor for F
where
    F: Fn(&HttpResponse) -> Result<String, ClientError> + Send + Sync,
{
    fn extract(&self, response: &HttpResponse) -> Result<String, ClientError> {
        self(response)
    }
}

/// Uses the whole response body as the token, as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBodyToken;

impl TokenExtractor for RawBodyToken {
    fn extract(&self, response: &HttpResponse) -> Result<String, ClientError> {
        Ok(response.text())
    }
}

/// Reads the token from a string field of a JSON object body,
/// e.g. `{"token": "..."}`.
#[derive(Debug, Clone)]
pub struct JsonFieldToken {
    field: String,
}

impl JsonFieldToken {
    /// Extract from the named field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl TokenExtractor for JsonFieldToken {
    fn extract(&self, response: &HttpResponse) -> Result<String, ClientError> {
        let body: Value = response
            .json()
            .map_err(|e| ClientError::Token(format!("auth body is not JSON: {}", e)))?;

        match body.get(self.field.as_str()) {
            Some(Value::String(token)) => Ok(token.clone()),
            Some(_) => Err(ClientError::Token(format!(
                "field '{}' is not a string",
                self.field
            ))),
            None => Err(ClientError::Token(format!(
                "field '{}' missing from auth body",
                self.field
            ))),
        }
    }
}
