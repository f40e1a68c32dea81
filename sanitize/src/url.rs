//! URL sanitization — scheme allow-listing.

use url::Url;

/// Sanitize a URL, allowing only absolute `http`/`https` URLs.
///
/// Returns the canonical serialization of the parsed URL, or an empty
/// string for anything that fails to parse or carries another scheme.
/// Never errors; rejection is normalization to empty.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed.to_string(),
        _ => String::new(),
    }
}

/// Sanitize an image reference.
///
/// Accepts inline `data:image/` payloads and `https://` URLs verbatim;
/// everything else becomes an empty string.
pub fn sanitize_image_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("data:image/") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        String::new()
    }
}
