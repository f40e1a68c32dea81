use proptest::prelude::*;

use instinct_sanitize::{
    sanitize_image_url, sanitize_text, sanitize_title, sanitize_url, MAX_TITLE_CHARS,
};

proptest! {
    /// sanitize_url is idempotent for all inputs.
    #[test]
    fn url_idempotent(input in ".*") {
        let once = sanitize_url(&input);
        prop_assert_eq!(sanitize_url(&once), once);
    }

    /// sanitize_url output is either empty or an http(s) URL.
    #[test]
    fn url_output_scheme(input in ".*") {
        let out = sanitize_url(&input);
        prop_assert!(
            out.is_empty() || out.starts_with("http://") || out.starts_with("https://")
        );
    }

    /// sanitize_image_url is idempotent and only passes the allow-list.
    #[test]
    fn image_url_idempotent(input in ".*") {
        let once = sanitize_image_url(&input);
        prop_assert_eq!(sanitize_image_url(&once), once.clone());
        prop_assert!(
            once.is_empty()
                || once.starts_with("data:image/")
                || once.starts_with("https://")
        );
    }

    /// sanitize_text is idempotent for all inputs.
    #[test]
    fn text_idempotent(input in ".*") {
        let once = sanitize_text(&input);
        prop_assert_eq!(sanitize_text(&once), once);
    }

    /// Sanitized text never contains markup delimiters as a <tag> pair.
    #[test]
    fn text_has_no_complete_tags(input in ".*") {
        let out = sanitize_text(&input);
        prop_assert!(!regex::Regex::new(r"<[^>]*>").unwrap().is_match(&out));
    }

    /// Titles never exceed the cap, in characters.
    #[test]
    fn title_capped(input in ".*") {
        prop_assert!(sanitize_title(&input).chars().count() <= MAX_TITLE_CHARS);
    }
}
