//! Path-matcher capability trait.
//!
//! Pattern matching is an injected strategy: the dispatch layer supplies a
//! default matcher per request, and any individual scoped interceptor may
//! carry its own override.  The pattern dialect is entirely the matcher's
//! business — a malformed pattern is a matcher failure mode, not a scoping
//! failure mode.

/// Strategy answering whether a path pattern matches a lookup path.
///
/// Implementations must be `Send + Sync` so a single matcher instance can be
/// shared across request-handling tasks without additional synchronization.
pub trait PathMatcher: Send + Sync {
    /// Return `true` if `pattern` matches the given lookup path.
    ///
    /// The lookup path is assumed to be normalized and decoded by the caller.
    fn matches(&self, pattern: &str, path: &str) -> bool;

    /// Return `true` if `candidate` contains syntax this matcher treats as a
    /// pattern (as opposed to a literal path).
    ///
    /// The default implementation assumes every string is a pattern, which is
    /// always safe — literal strings still match themselves.
    fn is_pattern(&self, candidate: &str) -> bool {
        let _ = candidate;
        true
    }
}
