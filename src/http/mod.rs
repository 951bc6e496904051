//! HTTP types for the authenticated client: methods, status codes, request
//! specs, decoded responses and raw header line handling.

mod headers;
mod request;
mod response;

pub use headers::{
    build_header_lines, header_block, parse_headers, parse_status_code, validate_header,
};
pub use request::{Method, RequestSpec};
pub use response::{HttpResponse, StatusCode};
