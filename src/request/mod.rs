//! Tolerant parsing of `.request` files.
//!
//! Each part of the request is found by searching the whole text with its
//! own pattern rather than by walking it line by line. This accepts loosely
//! written files, at the cost of occasionally reading header-shaped body text
//! as a header.

use log::debug;
use serde::Serialize;

// Re-exports
mod body;
pub use body::*;
mod headers;
pub use headers::*;
mod host;
pub use host::*;
pub mod load;
mod request_line;
pub use request_line::*;
mod scheme;
pub use scheme::*;
mod types;
pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    method: HTTPMethod,
    scheme: Scheme,
    host: String,
    path: String,
    headers: HeaderMap,
    body: RequestBody,
}

impl ParsedRequest {
    pub fn method(&self) -> HTTPMethod {
        self.method
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn url(&self) -> String {
        format!("{0}://{1}{2}", self.scheme, self.host, self.path)
    }

    /// Hands the request over to the `http` crate. Header names that are
    /// not valid HTTP tokens, such as comma-joined names, make this fail
    /// even though they parsed fine.
    pub fn into_http_request(self) -> Result<http::Request<RequestBody>, http::Error> {
        let mut builder = http::Request::builder()
            .method(http::Method::from(self.method))
            .uri(self.url());
        for (name, values) in self.headers.iter() {
            for value in values {
                builder = builder.header(name, value.as_bytes());
            }
        }
        builder.body(self.body)
    }
}

/// Parses the full text of a request file. `fallback_domain` is used as the
/// host when the text has no `Host` header.
pub fn parse_request(
    input: &str,
    fallback_domain: &str,
) -> Result<ParsedRequest, RequestParseError> {
    let ParsedRequestLine {
        method,
        path,
        version_token,
    } = extract_request_line(input)?;

    let headers = extract_headers(input);
    let host = resolve_host(&headers, fallback_domain).to_string();
    let scheme = resolve_scheme(&version_token);
    let body = extract_body(input);

    debug!("Parsed {method} {scheme}://{host}{path} with {0} headers", headers.len());
    Ok(ParsedRequest {
        method,
        scheme,
        host,
        path,
        headers,
        body,
    })
}
