//! Interceptor kernel contract for the Wicket dispatch layer.
//!
//! This crate defines the *trait interfaces and shared data types* for
//! path-scoped request interception.  No concrete implementations live here —
//! those belong in `wicket-intercept` (runtime).
//!
//! # Architecture mapping
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              wicket-kernel  (this crate)                    │
//! │  HandlerInterceptor trait   WebRequestInterceptor trait     │
//! │  PathMatcher trait                                          │
//! │  Exchange / InterceptRequest / InterceptResponse            │
//! │  HandlerRef / ModelView     InterceptError                  │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │  depends on
//! ┌──────────────────────────▼──────────────────────────────────┐
//! │              wicket-intercept  (runtime crate)              │
//! │  MappedInterceptor  (scoped wrapper)                        │
//! │  WebRequestAdapter  (alternate-shape adapter)               │
//! │  AntPathMatcher: impl PathMatcher                           │
//! │  InterceptorRegistry / ExecutionChain                       │
//! │  AccessLogInterceptor                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod interceptor;
pub mod matcher;
pub mod types;

// ── Flat re-exports ────────────────────────────────────────────────────────

pub use error::InterceptError;
pub use interceptor::{HandlerInterceptor, WebRequestInterceptor};
pub use matcher::PathMatcher;
pub use types::{Exchange, HandlerRef, HttpMethod, InterceptRequest, InterceptResponse, ModelView};
