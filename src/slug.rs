//! URL identifiers for articles.
//!
//! A slug is the lower-cased title, whitespace-separated words joined with
//! `-`, followed by the last six digits of the creation time in epoch
//! milliseconds. The suffix keeps two articles with the same title apart,
//! except when both land on the same residue modulo 10^6 milliseconds.

use chrono::Utc;

/// Derive a slug from `title` at the current time
pub fn generate_slug(title: &str) -> String {
    slug_at(title, Utc::now().timestamp_millis())
}

/// Derive a slug from `title` as if created at `millis` since the epoch
///
/// A title with no words yields the bare suffix, e.g. `-123456`.
pub fn slug_at(title: &str, millis: i64) -> String {
    let words = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{:06}", words, millis.rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn has_time_suffix(slug: &str, prefix: &str) -> bool {
        match slug.strip_prefix(prefix) {
            Some(suffix) => suffix.len() == 6 && suffix.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    #[test]
    fn slug_at_fixed_time() {
        assert_eq!(slug_at("Hello World", 1_700_000_123_456), "hello-world-123456");
        assert_eq!(slug_at("  How  to\ttrain   ", 1_700_000_000_042), "how-to-train-000042");
    }

    #[test]
    fn blank_title_keeps_only_the_suffix() {
        assert_eq!(slug_at("   \t ", 1_700_000_123_456), "-123456");
        assert_eq!(slug_at("", 1_700_000_000_007), "-000007");
    }

    #[test]
    fn distinct_millis_give_distinct_slugs() {
        let a = slug_at("Hello World", 1_700_000_000_001);
        let b = slug_at("Hello World", 1_700_000_000_002);
        assert_ne!(a, b);
        assert!(has_time_suffix(&a, "hello-world-"));
        assert!(has_time_suffix(&b, "hello-world-"));
    }

    #[test]
    fn generate_slug_uses_clock() {
        let slug = generate_slug("Dragons Are Real");
        assert!(has_time_suffix(&slug, "dragons-are-real-"), "{slug}");
    }

    #[test]
    fn suffix_wraps_every_million_millis() {
        // the documented collision window
        assert_eq!(slug_at("a", 5_000_123), slug_at("a", 9_000_123));
    }
}
