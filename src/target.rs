//! Target URL Composition
//!
//! Builds the final application URL from the fixed base and a user-supplied
//! suffix.

use url::Url;

/// The fixed base every target URL is rooted at. Only the suffix is
/// user-supplied.
pub const BASE_URL: &str = "https://cloud.servitechapp.com/";

/// Compose the target URL for a user-supplied suffix.
///
/// The suffix is trimmed and any leading `/` is stripped, so the result
/// carries exactly one separator. Returns `None` for empty or
/// whitespace-only input, and for input that would escape the fixed base
/// origin (e.g. an absolute URL pasted into the field).
pub fn compose(suffix: &str) -> Option<Url> {
    let trimmed = suffix.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let base = Url::parse(BASE_URL).ok()?;
    let composed = base.join(trimmed).ok()?;

    // join() resolves absolute and protocol-relative input against a new
    // origin; such input is rejected outright.
    if composed.origin() != base.origin() {
        return None;
    }

    Some(composed)
}
