use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::debug;

use super::{parse_request, ParsedRequest, RequestParseError};

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(RequestParseError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read request file: {err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<RequestParseError> for LoadError {
    fn from(err: RequestParseError) -> Self {
        Self::Parse(err)
    }
}

/// Reads the source to the end before parsing. Bytes that are not valid UTF-8
/// become U+FFFD rather than failing the load.
pub fn from_reader<R: Read>(
    fallback_domain: &str,
    mut reader: R,
) -> Result<ParsedRequest, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!("Read {0} bytes of request text", bytes.len());
    let input = String::from_utf8_lossy(&bytes);
    Ok(parse_request(&input, fallback_domain)?)
}

pub fn from_path<P: AsRef<Path>>(
    fallback_domain: &str,
    path: P,
) -> Result<ParsedRequest, LoadError> {
    let path = path.as_ref();
    debug!("Loading request file {0}", path.display());
    from_reader(fallback_domain, BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::request::HTTPMethod;

    #[test]
    fn load_from_cursor() {
        let request = from_reader(
            "example.com",
            Cursor::new("GET /chat HTTP/1.1\nHost: server.example.com\n"),
        )
        .expect("Loading a request from memory should succeed");
        assert_eq!(HTTPMethod::Get, request.method());
        assert_eq!("server.example.com", request.host());
    }

    #[test]
    fn load_latin1_bytes() {
        let request = from_reader(
            "example.com",
            Cursor::new(&b"GET /a HTTP/1.1\nHost: example.org\nX-Note: caf\xE9\n\nname=1"[..]),
        )
        .expect("Loading a request with a Latin-1 byte should succeed");
        assert_eq!(HTTPMethod::Get, request.method());
        assert_eq!("http://example.org/a", request.url());
        assert_eq!(Some("name=1"), request.body());
        // U+FFFD is not a header value character, so the value stops before it
        assert_eq!(Some("caf"), request.headers().get_first("X-Note"));
    }

    #[test]
    fn load_mangled() {
        let err = from_reader("example.com", Cursor::new("nothing to see here"))
            .expect_err("Loading a file without a request line should fail");
        assert!(
            matches!(err, LoadError::Parse(RequestParseError::MalformedRequestLine)),
            "Expected a parse error, got {err:?}"
        );
        assert_eq!(
            "unable to parse request: Mangled first line of request",
            err.to_string()
        );
    }

    #[test]
    fn load_missing_file() {
        let err = from_path("example.com", "this/file/does/not/exist.request")
            .expect_err("Loading a missing file should fail");
        assert!(matches!(err, LoadError::Io(_)), "Expected an IO error, got {err:?}");
    }
}
