//! Legacy post identifiers from the pre-sexagesimal short URL scheme.
//!
//! Old short links carried the post ID either as plain decimal digits or
//! in base 32 (`0-9a-v`, case-insensitive). Both forms are still honored
//! when a request would otherwise 404.

use crate::domain::entities::ResourceId;

const LEGACY_RADIX: u32 = 32;

/// Interprets a raw request path as a legacy resource ID.
///
/// Purely numeric paths are taken as decimal IDs; anything else is tried as
/// base 32. Returns `None` when the path is neither, when it overflows, or
/// when it names the `0` sentinel.
///
/// # Examples
///
/// ```
/// use hum::utils::legacy_id::parse_legacy_id;
///
/// assert_eq!(parse_legacy_id("123"), Some(123));
/// assert_eq!(parse_legacy_id("3r"), Some(123));
/// assert_eq!(parse_legacy_id("about/me"), None);
/// ```
pub fn parse_legacy_id(path: &str) -> Option<ResourceId> {
    let path = path.trim_matches('/');
    if path.is_empty() {
        return None;
    }

    let id = if path.bytes().all(|b| b.is_ascii_digit()) {
        path.parse::<ResourceId>().ok()?
    } else {
        ResourceId::from_str_radix(path, LEGACY_RADIX).ok()?
    };

    (id != 0).then_some(id)
}
