//! Error types for the interceptor kernel contract.
//!
//! [`InterceptError`] covers two distinct failure classes: *wiring-time*
//! errors detected while registering interceptors (empty patterns, duplicate
//! names) before any request traffic, and *runtime* errors raised inside a
//! wrapped interceptor or an injected path matcher while a request is in
//! flight.  The scoped wrapper itself never constructs errors of its own —
//! it propagates whatever its delegate produced, unchanged.

use thiserror::Error;

/// Error type shared by the interceptor traits and the wiring layer.
///
/// The enum is `#[non_exhaustive]` so future releases can add failure modes
/// without breaking existing `match` arms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InterceptError {
    // ── Wiring-time ──────────────────────────────────────────────────────────
    /// A registered include or exclude pattern is empty or whitespace-only.
    #[error("interceptor path pattern cannot be empty")]
    EmptyPattern,

    /// An interceptor `name()` is empty or whitespace-only.
    #[error("interceptor name cannot be empty")]
    EmptyInterceptorName,

    /// An interceptor with this name has already been registered.
    #[error("interceptor '{0}' is already registered")]
    DuplicateInterceptor(String),

    // ── Runtime ──────────────────────────────────────────────────────────────
    /// A failure raised inside a wrapped interceptor's lifecycle method.
    #[error("interceptor '{name}' failed: {message}")]
    Interceptor {
        /// The `name()` of the failing interceptor.
        name: String,
        /// Human-readable failure description.
        message: String,
    },

    /// A pattern the injected path matcher could not interpret.
    #[error("path matcher rejected pattern '{pattern}': {message}")]
    Matcher {
        /// The offending pattern string.
        pattern: String,
        /// Matcher-supplied diagnostic.
        message: String,
    },
}

impl InterceptError {
    /// Convenience constructor for failures raised inside an interceptor.
    pub fn interceptor(name: impl Into<String>, message: impl Into<String>) -> Self {
        InterceptError::Interceptor {
            name: name.into(),
            message: message.into(),
        }
    }
}
