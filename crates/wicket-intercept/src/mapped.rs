//! Scoped interceptor wrapper.
//!
//! [`MappedInterceptor`] pairs one [`HandlerInterceptor`] with the include
//! and exclude path patterns scoping where it applies, plus an optional
//! per-instance [`PathMatcher`] override.  The dispatch layer calls
//! [`matches`](MappedInterceptor::matches) per request and, only on a `true`
//! result, drives the three lifecycle methods — which this wrapper forwards
//! to the wrapped interceptor unchanged.

use crate::adapter::WebRequestAdapter;
use std::sync::Arc;
use wicket_kernel::error::InterceptError;
use wicket_kernel::interceptor::{HandlerInterceptor, WebRequestInterceptor};
use wicket_kernel::matcher::PathMatcher;
use wicket_kernel::types::{Exchange, HandlerRef, ModelView};

/// A [`HandlerInterceptor`] scoped to a set of path patterns.
///
/// Pattern lists are fixed at construction.  An empty include list means the
/// interceptor applies to every path; an empty exclude list excludes nothing.
/// There is no separate "absent" state — empty *is* the unrestricted state.
pub struct MappedInterceptor {
    /// Include patterns, in evaluation order.  Empty means "match everything".
    include_patterns: Vec<String>,
    /// Exclude patterns, in evaluation order.  Empty means "exclude nothing".
    exclude_patterns: Vec<String>,
    /// The wrapped interceptor.
    interceptor: Arc<dyn HandlerInterceptor>,
    /// Optional per-instance matcher, taking precedence over the matcher the
    /// dispatch layer passes into [`matches`](Self::matches).
    path_matcher: Option<Arc<dyn PathMatcher>>,
}

impl MappedInterceptor {
    /// Wrap `interceptor` with the given include and exclude patterns.
    ///
    /// Pattern syntax is not validated here — interpreting (and rejecting)
    /// patterns is the matcher's business.
    pub fn new(
        include_patterns: impl IntoIterator<Item = impl Into<String>>,
        exclude_patterns: impl IntoIterator<Item = impl Into<String>>,
        interceptor: Arc<dyn HandlerInterceptor>,
    ) -> Self {
        Self {
            include_patterns: include_patterns.into_iter().map(Into::into).collect(),
            exclude_patterns: exclude_patterns.into_iter().map(Into::into).collect(),
            interceptor,
            path_matcher: None,
        }
    }

    /// Wrap a [`WebRequestInterceptor`], adapting it into the full
    /// [`HandlerInterceptor`] shape via [`WebRequestAdapter`].
    pub fn from_web_request(
        include_patterns: impl IntoIterator<Item = impl Into<String>>,
        exclude_patterns: impl IntoIterator<Item = impl Into<String>>,
        interceptor: Arc<dyn WebRequestInterceptor>,
    ) -> Self {
        Self::new(
            include_patterns,
            exclude_patterns,
            Arc::new(WebRequestAdapter::new(interceptor)),
        )
    }

    /// Configure a matcher to use instead of the one the dispatch layer
    /// passes into [`matches`](Self::matches).
    ///
    /// Expected to be called once during wiring, before request traffic
    /// starts.  Requires `&mut self`, so a wrapper already shared behind an
    /// `Arc` cannot be reconfigured — matching the single-writer-before-
    /// many-readers convention.
    pub fn set_path_matcher(&mut self, matcher: Option<Arc<dyn PathMatcher>>) {
        self.path_matcher = matcher;
    }

    /// The configured per-instance matcher, or `None` if none.
    pub fn path_matcher(&self) -> Option<&dyn PathMatcher> {
        self.path_matcher.as_deref()
    }

    /// The include patterns this interceptor is mapped to (empty means all).
    pub fn path_patterns(&self) -> &[String] {
        &self.include_patterns
    }

    /// The wrapped interceptor.
    pub fn interceptor(&self) -> &Arc<dyn HandlerInterceptor> {
        &self.interceptor
    }

    /// Decide whether this interceptor applies to the given lookup path.
    ///
    /// Evaluation order:
    /// 1. the per-instance matcher, if configured, wins over `default_matcher`;
    /// 2. exclude patterns are checked first, in list order — the first hit
    ///    returns `false` unconditionally, regardless of the include list;
    /// 3. an empty include list means globally scoped: `true`;
    /// 4. otherwise the first matching include pattern returns `true`, and
    ///    `false` if none matched.
    pub fn matches(&self, lookup_path: &str, default_matcher: &dyn PathMatcher) -> bool {
        let matcher = self.path_matcher.as_deref().unwrap_or(default_matcher);
        for pattern in &self.exclude_patterns {
            if matcher.matches(pattern, lookup_path) {
                return false;
            }
        }
        if self.include_patterns.is_empty() {
            return true;
        }
        for pattern in &self.include_patterns {
            if matcher.matches(pattern, lookup_path) {
                return true;
            }
        }
        false
    }
}

/// Pure pass-through: every lifecycle call delegates to the wrapped
/// interceptor with unchanged arguments, propagating its result unaltered.
#[async_trait::async_trait]
impl HandlerInterceptor for MappedInterceptor {
    fn name(&self) -> &str {
        self.interceptor.name()
    }

    async fn pre_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
    ) -> Result<bool, InterceptError> {
        self.interceptor.pre_handle(exchange, handler).await
    }

    async fn post_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
        model: Option<&ModelView>,
    ) -> Result<(), InterceptError> {
        self.interceptor.post_handle(exchange, handler, model).await
    }

    async fn after_completion(
        &self,
        exchange: &Exchange,
        handler: &HandlerRef,
        failure: Option<&InterceptError>,
    ) -> Result<(), InterceptError> {
        self.interceptor
            .after_completion(exchange, handler, failure)
            .await
    }
}
