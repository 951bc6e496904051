//! Encoding and decoding of raw `Name: Value` header lines.

use crate::client::ClientError;
use std::collections::HashMap;

/// Encode a header mapping as `name: value` lines, sorted by name.
pub fn build_header_lines(headers: &HashMap<String, String>) -> Vec<String> {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    lines.sort();
    lines
}

/// Encode a header mapping as a single CRLF-joined block.
pub fn header_block(headers: &HashMap<String, String>) -> String {
    build_header_lines(headers).join("\r\n")
}

/// Parse the numeric status code out of the status line.
///
/// The first entry of `lines` must look like `"<version> <code> <reason>"`
/// with a three digit code between 100 and 599.
pub fn parse_status_code<S: AsRef<str>>(lines: &[S]) -> Result<u16, ClientError> {
    let status_line = lines
        .first()
        .map(|line| line.as_ref())
        .ok_or_else(|| ClientError::MalformedResponse("missing status line".to_string()))?;

    let code = status_line.split_whitespace().nth(1).ok_or_else(|| {
        ClientError::MalformedResponse(format!("no status code in '{}'", status_line))
    })?;

    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::MalformedResponse(format!(
            "invalid status code '{}'",
            code
        )));
    }

    let code = code.parse::<u16>().map_err(|_| {
        ClientError::MalformedResponse(format!("invalid status code '{}'", code))
    })?;
    if !(100..=599).contains(&code) {
        return Err(ClientError::MalformedResponse(format!(
            "status code {} out of range",
            code
        )));
    }
    Ok(code)
}

/// Check that a header name and value cannot break out of their line.
pub fn validate_header(name: &str, value: &str) -> Result<(), ClientError> {
    if name.is_empty() || name.contains(':') || contains_line_break(name) {
        return Err(ClientError::InvalidRequest(format!(
            "invalid header name '{}'",
            name.escape_debug()
        )));
    }
    if contains_line_break(value) {
        return Err(ClientError::InvalidRequest(format!(
            "line break in value of header '{}'",
            name
        )));
    }
    Ok(())
}

fn contains_line_break(s: &str) -> bool {
    s.contains(['\r', '\n'])
}

/// Parse header lines into a mapping. Lines without a colon (including the
/// status line) are skipped and later duplicates overwrite earlier ones.
pub fn parse_headers<S: AsRef<str>>(lines: &[S]) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for line in lines {
        let Some((name, value)) = line.as_ref().split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    headers
}
