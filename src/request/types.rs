use std::str::FromStr;

use serde::Serialize;

/// The methods a request file may use. HEAD, CONNECT and TRACE are
/// deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HTTPMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    /// The request line matched zero times, or more than once.
    MalformedRequestLine,
}

impl HTTPMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HTTPMethod::Get => "GET",
            HTTPMethod::Post => "POST",
            HTTPMethod::Put => "PUT",
            HTTPMethod::Delete => "DELETE",
            HTTPMethod::Patch => "PATCH",
            HTTPMethod::Options => "OPTIONS",
        }
    }
}

impl FromStr for HTTPMethod {
    type Err = RequestParseError;

    fn from_str(s: &str) -> Result<HTTPMethod, Self::Err> {
        match s {
            "GET" => Ok(HTTPMethod::Get),
            "POST" => Ok(HTTPMethod::Post),
            "PUT" => Ok(HTTPMethod::Put),
            "DELETE" => Ok(HTTPMethod::Delete),
            "PATCH" => Ok(HTTPMethod::Patch),
            "OPTIONS" => Ok(HTTPMethod::Options),
            _ => Err(RequestParseError::MalformedRequestLine),
        }
    }
}

impl std::fmt::Display for HTTPMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HTTPMethod> for http::Method {
    fn from(method: HTTPMethod) -> Self {
        match method {
            HTTPMethod::Get => http::Method::GET,
            HTTPMethod::Post => http::Method::POST,
            HTTPMethod::Put => http::Method::PUT,
            HTTPMethod::Delete => http::Method::DELETE,
            HTTPMethod::Patch => http::Method::PATCH,
            HTTPMethod::Options => http::Method::OPTIONS,
        }
    }
}

impl RequestParseError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedRequestLine => "Mangled first line of request",
        }
    }
}

impl std::fmt::Display for RequestParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unable to parse request: {0}", self.reason())
    }
}

impl std::error::Error for RequestParseError {}
