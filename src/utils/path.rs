//! Small string helpers for short paths and base URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that cling to a URL pasted into running prose.
const TRAILING_PUNCTUATION: [char; 3] = ['.', ',', ')'];

/// Host path pattern claimed by the shortener: one lowercase letter,
/// optionally followed by `/` and anything.
static SHORT_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^[a-z](/.*)?$").expect("short path pattern is valid"));

/// Returns the request path without its leading `/` if it looks like a short
/// path, `None` otherwise.
///
/// ```
/// use hum::utils::path::match_short_path;
///
/// assert_eq!(match_short_path("/b/4c2"), Some("b/4c2"));
/// assert_eq!(match_short_path("/t"), Some("t"));
/// assert_eq!(match_short_path("/health"), None);
/// ```
pub fn match_short_path(request_path: &str) -> Option<&str> {
    let path = request_path.strip_prefix('/').unwrap_or(request_path);
    SHORT_PATH_PATTERN.is_match(path).then_some(path)
}

/// Splits on the first `/`. The tail is `None` when there is no separator.
pub fn split_first(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('/') {
        Some((head, tail)) => (head, Some(tail)),
        None => (raw, None),
    }
}

/// Strips any run of `.`, `,` and `)` from the end of `id`.
pub fn strip_trailing_punctuation(id: &str) -> &str {
    id.trim_end_matches(TRAILING_PUNCTUATION)
}

/// Appends exactly one trailing `/`.
pub fn trailingslashit(url: &str) -> String {
    format!("{}/", untrailingslashit(url))
}

/// Removes every trailing `/`.
pub fn untrailingslashit(url: &str) -> &str {
    url.trim_end_matches('/')
}
