//! Ant-style glob path matcher.
//!
//! The default [`PathMatcher`] dialect used by the registry.  Patterns and
//! paths are compared segment by segment (segments are `/`-separated):
//!
//! - a literal segment matches itself exactly;
//! - `?` matches exactly one character within a segment;
//! - `*` matches any run of characters within a segment (including none);
//! - `**` matches zero or more whole segments;
//! - `{param}` matches any single segment (no capture — extracting parameter
//!   values is the router's job, not the scoping layer's).
//!
//! Leading and trailing slashes are insignificant: `/admin/**` matches
//! `/admin`, `/admin/users`, and `/admin/a/b`.
//!
//! Matching is a linear recursive scan — O(segments × pattern length) — which
//! is entirely acceptable for interceptor scoping (pattern lists are small)
//! and trivially correct to verify.

use wicket_kernel::matcher::PathMatcher;

/// Segment-wise glob [`PathMatcher`] supporting `?`, `*`, `**`, and `{param}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AntPathMatcher;

impl AntPathMatcher {
    /// Create a matcher.  The type is stateless; instances are free to copy.
    pub fn new() -> Self {
        Self
    }
}

impl PathMatcher for AntPathMatcher {
    fn matches(&self, pattern: &str, path: &str) -> bool {
        match_segments(&segments(pattern), &segments(path))
    }

    fn is_pattern(&self, candidate: &str) -> bool {
        candidate.contains('*') || candidate.contains('?') || candidate.contains('{')
    }
}

/// Split on `/`, dropping empty segments so leading/trailing slashes and `//`
/// runs are insignificant.
fn segments(s: &str) -> Vec<&str> {
    s.split('/').filter(|seg| !seg.is_empty()).collect()
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((&"**", rest)) => {
            // `**` spans zero or more segments: try every split point.
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        Some((seg, rest)) => match path.split_first() {
            Some((candidate, path_rest)) => {
                match_one_segment(seg, candidate) && match_segments(rest, path_rest)
            }
            None => false,
        },
    }
}

fn match_one_segment(pattern: &str, segment: &str) -> bool {
    if pattern.starts_with('{') && pattern.ends_with('}') && pattern.len() >= 2 {
        return true;
    }
    let pat: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = segment.chars().collect();
    match_chars(&pat, &text)
}

fn match_chars(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some(('*', rest)) => (0..=text.len()).any(|skip| match_chars(rest, &text[skip..])),
        Some(('?', rest)) => !text.is_empty() && match_chars(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && match_chars(rest, &text[1..]),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        AntPathMatcher::new().matches(pattern, path)
    }

    #[test]
    fn literal_paths_match_exactly() {
        assert!(matches("/health", "/health"));
        assert!(!matches("/health", "/healthz"));
        assert!(!matches("/health", "/health/live"));
    }

    #[test]
    fn slashes_are_insignificant_at_the_edges() {
        assert!(matches("/admin/users/", "/admin/users"));
        assert!(matches("admin/users", "/admin/users/"));
    }

    #[test]
    fn single_star_stays_within_one_segment() {
        assert!(matches("/a/*", "/a/x"));
        assert!(matches("/files/*.txt", "/files/report.txt"));
        assert!(!matches("/a/*", "/a/x/y"));
        assert!(!matches("/a/*", "/a"));
    }

    #[test]
    fn question_mark_matches_exactly_one_char() {
        assert!(matches("/v?", "/v1"));
        assert!(!matches("/v?", "/v12"));
        assert!(!matches("/v?", "/v"));
    }

    #[test]
    fn double_star_spans_zero_or_more_segments() {
        assert!(matches("/admin/**", "/admin"));
        assert!(matches("/admin/**", "/admin/users"));
        assert!(matches("/admin/**", "/admin/a/b/c"));
        assert!(!matches("/admin/**", "/public/admin"));
    }

    #[test]
    fn double_star_in_the_middle() {
        assert!(matches("/a/**/z", "/a/z"));
        assert!(matches("/a/**/z", "/a/b/c/z"));
        assert!(!matches("/a/**/z", "/a/b/c"));
    }

    #[test]
    fn param_segment_matches_any_single_segment() {
        assert!(matches("/v1/models/{model_id}", "/v1/models/gpt-4"));
        assert!(!matches("/v1/models/{model_id}", "/v1/models"));
        assert!(!matches("/v1/models/{model_id}", "/v1/models/a/b"));
    }

    #[test]
    fn mixed_wildcards() {
        assert!(matches("/api/*/users/**", "/api/v2/users/42/orders"));
        assert!(!matches("/api/*/users/**", "/api/users/42"));
    }

    #[test]
    fn multibyte_text_is_matched_per_char() {
        assert!(matches("/café/?", "/café/é"));
        assert!(matches("/*", "/日本語"));
    }

    #[test]
    fn is_pattern_detects_wildcard_syntax() {
        let m = AntPathMatcher::new();
        assert!(m.is_pattern("/a/*"));
        assert!(m.is_pattern("/v?"));
        assert!(m.is_pattern("/m/{id}"));
        assert!(!m.is_pattern("/plain/path"));
    }
}
