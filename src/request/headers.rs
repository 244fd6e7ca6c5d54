use std::sync::LazyLock;

use indexmap::IndexMap;
use log::trace;
use regex::Regex;
use serde::Serialize;

/// `Name: value` anywhere in the text. Names may contain spaces and commas so
/// that combined names such as `Content-Security-Policy, X-WebKit-CSP` survive.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z0-9, \-]+): ?([a-zA-Z0-9, ;*:=+()/“”"‘’<>.\-]+)"#)
        .expect("The header regex should compile")
});

/// Header names mapped to every value seen for them, in the order they were
/// first encountered. Names are kept exactly as written, so `Content-Type` and
/// `content-type` are separate entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderMap {
    map: IndexMap<String, Vec<String>>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.entry(name.into()).or_default().push(value.into());
    }

    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.map.get(name).map(Vec::as_slice)
    }

    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

/// Receives the WHOLE request text, not just the header block. Anything that
/// looks like a header is collected, including lines inside the body.
pub fn extract_headers(input: &str) -> HeaderMap {
    let headers: HeaderMap = HEADER
        .captures_iter(input)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();
    trace!("Extracted {0} distinct header names", headers.len());
    headers
}
