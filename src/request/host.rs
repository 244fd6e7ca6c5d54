use super::headers::HeaderMap;

/// The first `Host` header wins. The lookup is case-sensitive, so a `host`
/// header is ignored in favour of the fallback.
pub fn resolve_host<'a>(headers: &'a HeaderMap, fallback_domain: &'a str) -> &'a str {
    headers.get_first("Host").unwrap_or(fallback_domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_from_header() {
        let headers: HeaderMap = [("Host", "www.example.com")].into_iter().collect();
        assert_eq!("www.example.com", resolve_host(&headers, "example.com"));
    }

    #[test]
    fn host_first_value_wins() {
        let headers: HeaderMap = [("Host", "first.example.com"), ("Host", "second.example.com")]
            .into_iter()
            .collect();
        assert_eq!("first.example.com", resolve_host(&headers, "example.com"));
    }

    #[test]
    fn host_fallback() {
        assert_eq!("example.com", resolve_host(&HeaderMap::new(), "example.com"));
    }

    #[test]
    fn host_lowercase_header_ignored() {
        let headers: HeaderMap = [("host", "www.example.com")].into_iter().collect();
        assert_eq!("example.com", resolve_host(&headers, "example.com"));
    }
}
