//! Slug and identifier resolution shared by the feed parser and query input.
//!
//! A product URL ends in a slug like `ao-thun-basic-ab12.html`; the last
//! hyphen-delimited segment is the canonical id, the rest is the display name.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

fn bare_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9]+$").expect("bare id regex must compile"))
}

/// Extracts the canonical lowercase product id from a slug.
///
/// Strips one trailing `.html`, then takes the last hyphen-delimited segment.
/// A slug without hyphens is its own id.
#[must_use]
pub fn extract_product_id(slug: &str) -> String {
    let clean = slug.strip_suffix(".html").unwrap_or(slug);
    clean.rsplit('-').next().unwrap_or(clean).to_lowercase()
}

/// Derives a display name from a slug by dropping the trailing id segment
/// and title-casing the rest. Segments of three characters or fewer are
/// treated as acronyms and fully uppercased.
///
/// A slug with no name segments falls back to the uppercased id.
#[must_use]
pub fn humanize_slug(slug: &str, product_id: &str) -> String {
    let clean = slug.strip_suffix(".html").unwrap_or(slug);
    let parts: Vec<&str> = clean.split('-').collect();
    if parts.len() <= 1 {
        return product_id.to_uppercase();
    }
    let words: Vec<String> = parts[..parts.len() - 1]
        .iter()
        .map(|piece| format_word(piece))
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        return product_id.to_uppercase();
    }
    words.join(" ")
}

fn format_word(word: &str) -> String {
    if word.chars().count() <= 3 {
        return word.to_uppercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolves a raw user token into a canonical product id.
///
/// Accepts a bare alphanumeric id, a full URL, or a path-like slug. Returns
/// `None` for tokens that yield no usable slug; never panics on malformed
/// input. A non-`None` result is always lowercase and non-empty.
#[must_use]
pub fn resolve_token(token: &str) -> Option<String> {
    let plain = token.trim();
    if plain.is_empty() {
        return None;
    }

    if bare_id_re().is_match(plain) {
        return Some(plain.to_lowercase());
    }

    // Full URL: take the last non-empty path segment. Anything that fails
    // URL parsing is treated as a plain slash-delimited path.
    let parsed_path;
    let path = match Url::parse(plain) {
        Ok(url) => {
            parsed_path = url.path().to_string();
            parsed_path.as_str()
        }
        Err(_) => plain,
    };

    let slug = path.split('/').filter(|segment| !segment.is_empty()).last()?;
    let clean_slug = slug.split(['?', '#']).next().unwrap_or(slug);
    if clean_slug.is_empty() {
        return None;
    }

    let id = extract_product_id(clean_slug);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_id_last_hyphen_segment() {
        assert_eq!(extract_product_id("ao-thun-basic-ab12"), "ab12");
    }

    #[test]
    fn extract_id_strips_html_extension() {
        assert_eq!(extract_product_id("ao-thun-basic-ab12.html"), "ab12");
    }

    #[test]
    fn extract_id_lowercases() {
        assert_eq!(extract_product_id("ao-thun-basic-AB12"), "ab12");
    }

    #[test]
    fn extract_id_no_hyphen_uses_whole_slug() {
        assert_eq!(extract_product_id("AB12.html"), "ab12");
    }

    #[test]
    fn humanize_drops_id_segment_and_title_cases() {
        assert_eq!(humanize_slug("ao-thun-basic-ab12", "ab12"), "AO Thun Basic");
    }

    #[test]
    fn humanize_short_segments_become_acronyms() {
        assert_eq!(humanize_slug("usb-hub-cd34", "cd34"), "USB HUB");
    }

    #[test]
    fn humanize_no_hyphen_falls_back_to_uppercased_id() {
        assert_eq!(humanize_slug("ab12", "ab12"), "AB12");
    }

    #[test]
    fn humanize_skips_empty_segments() {
        assert_eq!(humanize_slug("ao--thun-ab12", "ab12"), "AO Thun");
    }

    #[test]
    fn resolve_bare_id_lowercased() {
        assert_eq!(resolve_token("AB12").as_deref(), Some("ab12"));
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(resolve_token("  ab12  ").as_deref(), Some("ab12"));
    }

    #[test]
    fn resolve_empty_token_is_none() {
        assert_eq!(resolve_token("   "), None);
    }

    #[test]
    fn resolve_url_with_query_and_extension() {
        assert_eq!(
            resolve_token("https://shop.example.com/ao-thun-basic-ab12.html?ref=x").as_deref(),
            Some("ab12")
        );
    }

    #[test]
    fn resolve_url_with_fragment() {
        assert_eq!(
            resolve_token("https://shop.example.com/p/ao-thun-basic-ab12#top").as_deref(),
            Some("ab12")
        );
    }

    #[test]
    fn resolve_url_trailing_slash_uses_last_nonempty_segment() {
        assert_eq!(
            resolve_token("https://shop.example.com/ao-thun-basic-ab12/").as_deref(),
            Some("ab12")
        );
    }

    #[test]
    fn resolve_plain_path_fallback() {
        assert_eq!(
            resolve_token("catalog/ao-thun-basic-ab12.html").as_deref(),
            Some("ab12")
        );
    }

    #[test]
    fn resolve_hyphenated_slug_without_slashes() {
        assert_eq!(resolve_token("ao-thun-basic-ab12").as_deref(), Some("ab12"));
    }

    #[test]
    fn resolve_url_with_no_path_is_none() {
        assert_eq!(resolve_token("https://shop.example.com"), None);
    }

    #[test]
    fn resolve_never_returns_empty_or_uppercase() {
        for token in ["AB12", "https://x.vn/a-B9.html?q=1", "a/b/C-d4"] {
            let resolved = resolve_token(token).expect("token should resolve");
            assert!(!resolved.is_empty());
            assert_eq!(resolved, resolved.to_lowercase());
        }
    }
}
