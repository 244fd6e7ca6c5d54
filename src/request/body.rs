use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// The last line of the text, if it is made only of body characters and
/// follows a line break.
static BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\n([a-zA-Z0-9<>=/&{}" ]+)$"#).expect("The body regex should compile")
});

/// `None` means the file has no body, which is not the same as an empty one.
pub type RequestBody = Option<String>;

pub fn extract_body(input: &str) -> RequestBody {
    let body = BODY
        .captures(input)
        .map(|caps| caps[1].to_string())
        .filter(|content| !content.is_empty());
    match &body {
        Some(content) => trace!("Extracted a {0} byte body", content.len()),
        None => trace!("No body found"),
    }
    body
}
