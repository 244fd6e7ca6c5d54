use std::{str::FromStr, sync::LazyLock};

use log::{debug, trace};
use regex::Regex;

use super::types::{HTTPMethod, RequestParseError};

// HEAD, CONNECT and TRACE are not in the method list, so files using them
// are rejected as a mangled request line.
static REQUEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(GET|POST|PUT|DELETE|PATCH|OPTIONS) ?([a-zA-Z0-9/?=&%.]+) ?(HTTPS?/[0-9].?[0-9]?|[0-9])")
        .expect("The request line regex should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequestLine {
    pub method: HTTPMethod,
    pub path: String,
    /// Either `HTTP/x.y`, `HTTPS/x.y` or a bare digit.
    pub version_token: String,
}

/// The request line may sit anywhere in the text, but it must appear exactly
/// once.
pub fn extract_request_line(input: &str) -> Result<ParsedRequestLine, RequestParseError> {
    let mut matches = REQUEST_LINE.captures_iter(input);
    let caps = match (matches.next(), matches.next()) {
        (Some(caps), None) => caps,
        (None, _) => {
            debug!("No request line found");
            return Err(RequestParseError::MalformedRequestLine);
        }
        (Some(_), Some(_)) => {
            debug!("More than one request line found");
            return Err(RequestParseError::MalformedRequestLine);
        }
    };

    let line = ParsedRequestLine {
        method: HTTPMethod::from_str(&caps[1])?,
        path: caps[2].to_string(),
        version_token: caps[3].to_string(),
    };
    trace!("Parsed request line: {line:?}");
    Ok(line)
}
