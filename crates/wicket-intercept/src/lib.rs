//! `wicket-intercept` — path-scoped interceptor runtime.
//!
//! This crate provides the concrete implementations of the interceptor
//! kernel contracts defined in `wicket-kernel`:
//!
//! | Kernel contract | Implementation |
//! |----------------|----------------|
//! | [`HandlerInterceptor`](wicket_kernel::HandlerInterceptor) | user implementations, [`interceptors::AccessLogInterceptor`] |
//! | [`WebRequestInterceptor`](wicket_kernel::WebRequestInterceptor) | adapted via [`adapter::WebRequestAdapter`] |
//! | [`PathMatcher`](wicket_kernel::PathMatcher) | [`ant::AntPathMatcher`] |
//!
//! The central type is [`mapped::MappedInterceptor`]: one interceptor plus
//! the include/exclude path patterns scoping where it applies.  The
//! [`registry::InterceptorRegistry`] collects mapped interceptors at wiring
//! time, and per request produces a [`chain::ExecutionChain`] that drives the
//! three lifecycle phases in order.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use wicket_intercept::interceptors::AccessLogInterceptor;
//! use wicket_intercept::registry::{InterceptorRegistration, InterceptorRegistry};
//!
//! let mut registry = InterceptorRegistry::new();
//! registry
//!     .add(
//!         InterceptorRegistration::new(Arc::new(AccessLogInterceptor::new()))
//!             .include_patterns(["/api/**"])
//!             .exclude_patterns(["/api/health"]),
//!     )
//!     .unwrap();
//!
//! let chain = registry.chain_for("/api/users");
//! assert_eq!(chain.len(), 1);
//! ```

pub mod adapter;
pub mod ant;
pub mod chain;
pub mod interceptors;
pub mod mapped;
pub mod registry;

// Re-export the kernel types for convenience.
pub use wicket_kernel as kernel;
