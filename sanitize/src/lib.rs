//! Input sanitization for user-generated poll content.
//!
//! Defense-in-depth guards against stored/reflected injection. Every
//! function here is pure, total, and idempotent: disallowed content is
//! normalized away (usually to an empty string), never reported as an
//! error.

pub mod text;
pub mod url;

pub use text::{
    sanitize_comment, sanitize_description, sanitize_display_name, sanitize_options,
    sanitize_text, sanitize_title, MAX_COMMENT_CHARS, MAX_DESCRIPTION_CHARS,
    MAX_DISPLAY_NAME_CHARS, MAX_OPTION_CHARS, MAX_TITLE_CHARS,
};
pub use url::{sanitize_image_url, sanitize_url};
