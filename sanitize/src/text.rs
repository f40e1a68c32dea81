//! Text sanitization — markup stripping and length caps.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum lengths (in characters) applied after sanitization.
pub const MAX_TITLE_CHARS: usize = 64;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_COMMENT_CHARS: usize = 500;
pub const MAX_DISPLAY_NAME_CHARS: usize = 30;
pub const MAX_OPTION_CHARS: usize = 100;

static HTML_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static JAVASCRIPT_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript\s*:").unwrap());
static DATA_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)data\s*:").unwrap());
static EVENT_HANDLERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip tag-delimited markup and dangerous content from user text.
///
/// Removes `<...>` runs, `javascript:`/`data:` URI prefixes (case
/// insensitive), and `on<word>=` handler patterns, then collapses
/// whitespace runs to a single space and trims.
///
/// The stripping passes repeat until nothing changes: removing one match
/// can splice the surrounding text into a new match (`jajavascript::`
/// becomes `javascript:`), so a single pass could still emit a dangerous
/// prefix. Each pass only deletes, so the loop terminates.
pub fn sanitize_text(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let stripped = HTML_TAGS.replace_all(&current, "");
        let stripped = JAVASCRIPT_URI.replace_all(&stripped, "");
        let stripped = DATA_URI.replace_all(&stripped, "");
        let next = EVENT_HANDLERS.replace_all(&stripped, "").into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    let collapsed = WHITESPACE_RUNS.replace_all(&current, " ");
    collapsed.trim().to_string()
}

/// Truncate to at most `max` characters, never splitting a scalar value.
fn truncate_chars(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        s
    } else {
        s.chars().take(max).collect()
    }
}

/// Sanitize a poll title.
pub fn sanitize_title(title: &str) -> String {
    truncate_chars(sanitize_text(title), MAX_TITLE_CHARS)
}

/// Sanitize a poll description.
pub fn sanitize_description(desc: &str) -> String {
    truncate_chars(sanitize_text(desc), MAX_DESCRIPTION_CHARS)
}

/// Sanitize a comment body.
pub fn sanitize_comment(text: &str) -> String {
    truncate_chars(sanitize_text(text), MAX_COMMENT_CHARS)
}

/// Sanitize a user display name.
pub fn sanitize_display_name(name: &str) -> String {
    truncate_chars(sanitize_text(name), MAX_DISPLAY_NAME_CHARS)
}

/// Sanitize every option label in a poll's option list.
pub fn sanitize_options<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    options
        .iter()
        .map(|o| truncate_chars(sanitize_text(o.as_ref()), MAX_OPTION_CHARS))
        .collect()
}
