//! Outbound request description built by callers of the client.

use crate::client::ClientError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;

/// HTTP method enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
            Method::Patch => write!(f, "PATCH"),
            Method::Options => write!(f, "OPTIONS"),
        }
    }
}

impl FromStr for Method {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "OPTIONS" => Ok(Method::Options),
            other => Err(ClientError::InvalidRequest(format!(
                "unsupported method '{}'",
                other
            ))),
        }
    }
}

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
            Method::Put => hyper::Method::PUT,
            Method::Delete => hyper::Method::DELETE,
            Method::Patch => hyper::Method::PATCH,
            Method::Options => hyper::Method::OPTIONS,
        }
    }
}

/// A caller-supplied request: target, method, JSON payload and headers.
///
/// The `Authorization` header is owned by the client and any caller value
/// for it is replaced when the request is sent.
#[derive(Debug)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Absolute, scheme-qualified URL.
    pub url: String,
    /// Caller headers.
    pub headers: HashMap<String, String>,
    payload: Map<String, Value>,
    payload_error: Option<serde_json::Error>,
}

impl RequestSpec {
    /// Create a new request with an empty payload and no headers.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            payload: Map::new(),
            payload_error: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Insert a single payload field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Replace the payload with any value that serializes to a JSON object.
    ///
    /// Encoding failures are kept and reported when the request is sent.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => {
                self.payload = map;
                self.payload_error = None;
            }
            Ok(other) => {
                self.payload_error = Some(serde::ser::Error::custom(format!(
                    "payload must be a JSON object, got {}",
                    json_kind(&other)
                )));
            }
            Err(err) => self.payload_error = Some(err),
        }
        self
    }

    /// Current payload fields.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Encode the payload as a request body; an empty payload has no body.
    pub fn encode_body(&mut self) -> Result<Option<Bytes>, ClientError> {
        if let Some(err) = self.payload_error.take() {
            return Err(ClientError::Serialization(err));
        }
        if self.payload.is_empty() {
            return Ok(None);
        }
        let body = serde_json::to_vec(&self.payload)?;
        Ok(Some(Bytes::from(body)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
