use serde::Serialize;

/// Whether the request should be sent over TLS.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub struct Scheme {
    pub is_secure: bool,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        if self.is_secure {
            "https"
        } else {
            "http"
        }
    }
}

impl From<Scheme> for &'static str {
    fn from(scheme: Scheme) -> Self {
        scheme.as_str()
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the first five bytes of the version token matter, and only if they
/// are exactly `HTTPS`. A bare digit such as `1` is never secure.
pub fn resolve_scheme(version_token: &str) -> Scheme {
    Scheme {
        is_secure: version_token.as_bytes().starts_with(b"HTTPS"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_http_1_0() {
        assert_eq!(Scheme { is_secure: false }, resolve_scheme("HTTP/1.0"));
    }

    #[test]
    fn scheme_https_1_1() {
        assert_eq!(Scheme { is_secure: true }, resolve_scheme("HTTPS/1.1"));
    }

    #[test]
    fn scheme_bare_digit() {
        assert_eq!(Scheme { is_secure: false }, resolve_scheme("1"));
    }

    #[test]
    fn scheme_http_2() {
        assert_eq!(Scheme { is_secure: false }, resolve_scheme("HTTP/2"));
    }

    #[test]
    fn scheme_exactly_https() {
        assert_eq!(Scheme { is_secure: true }, resolve_scheme("HTTPS"));
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(
            !resolve_scheme("https/1.1").is_secure,
            "Lower-case https should not be treated as secure"
        );
    }

    #[test]
    fn scheme_display() {
        assert_eq!("https", Scheme { is_secure: true }.to_string());
        assert_eq!("http", Scheme::default().to_string());
    }
}
