//! Interceptor wiring layer.
//!
//! [`InterceptorRegistry`] collects [`MappedInterceptor`]s at application
//! wiring time, validates registrations before any request traffic, and per
//! request produces the [`ExecutionChain`] of interceptors whose scope covers
//! the lookup path.

use crate::ant::AntPathMatcher;
use crate::chain::ExecutionChain;
use crate::mapped::MappedInterceptor;
use std::sync::Arc;
use wicket_kernel::error::InterceptError;
use wicket_kernel::interceptor::{HandlerInterceptor, WebRequestInterceptor};
use wicket_kernel::matcher::PathMatcher;

// ─────────────────────────────────────────────────────────────────────────────
// InterceptorRegistration
// ─────────────────────────────────────────────────────────────────────────────

/// Builder describing one interceptor registration.
///
/// An interceptor with no include patterns is globally scoped; exclude
/// patterns carve paths out of that scope.  `order` decides the position in
/// the pre-handle sequence (lower runs first; ties keep registration order).
pub struct InterceptorRegistration {
    interceptor: Arc<dyn HandlerInterceptor>,
    include_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
    matcher: Option<Arc<dyn PathMatcher>>,
    order: i32,
}

impl InterceptorRegistration {
    /// Start a registration for the given interceptor.
    pub fn new(interceptor: Arc<dyn HandlerInterceptor>) -> Self {
        Self {
            interceptor,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            matcher: None,
            order: 0,
        }
    }

    /// Start a registration for a request-scoped interceptor, adapting it
    /// into the full shape.
    pub fn for_web_request(interceptor: Arc<dyn WebRequestInterceptor>) -> Self {
        Self::new(Arc::new(crate::adapter::WebRequestAdapter::new(interceptor)))
    }

    /// Builder: add include patterns (none means "apply everywhere").
    pub fn include_patterns(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.include_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Builder: add exclude patterns.
    pub fn exclude_patterns(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Builder: give this interceptor its own matcher instead of the
    /// registry default.
    pub fn with_matcher(mut self, matcher: Arc<dyn PathMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Builder: set the execution order slot (lower runs first).
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InterceptorRegistry
// ─────────────────────────────────────────────────────────────────────────────

struct Entry {
    order: i32,
    mapped: Arc<MappedInterceptor>,
}

/// Ordered collection of scoped interceptors plus the default path matcher
/// handed to every scope decision.
///
/// Wiring happens through `&mut self` before the registry is shared with the
/// dispatch layer; afterwards [`chain_for`](Self::chain_for) only reads.
pub struct InterceptorRegistry {
    /// Entries sorted ascending by order (stable for equal orders).
    entries: Vec<Entry>,
    default_matcher: Arc<dyn PathMatcher>,
}

impl InterceptorRegistry {
    /// Create an empty registry with [`AntPathMatcher`] as the default
    /// matching dialect.
    pub fn new() -> Self {
        Self::with_default_matcher(Arc::new(AntPathMatcher::new()))
    }

    /// Create an empty registry with a custom default matcher.
    pub fn with_default_matcher(matcher: Arc<dyn PathMatcher>) -> Self {
        Self {
            entries: Vec::new(),
            default_matcher: matcher,
        }
    }

    /// The default matcher handed to scope decisions.
    pub fn default_matcher(&self) -> &Arc<dyn PathMatcher> {
        &self.default_matcher
    }

    /// Validate and register an interceptor.
    ///
    /// Rejects empty interceptor names, blank pattern strings, and duplicate
    /// interceptor names — all before any request traffic, in the spirit of
    /// validate-before-runtime.
    pub fn add(&mut self, registration: InterceptorRegistration) -> Result<(), InterceptError> {
        let name = registration.interceptor.name();
        if name.trim().is_empty() {
            return Err(InterceptError::EmptyInterceptorName);
        }
        if self
            .entries
            .iter()
            .any(|e| e.mapped.interceptor().name() == name)
        {
            return Err(InterceptError::DuplicateInterceptor(name.to_string()));
        }
        if registration
            .include_patterns
            .iter()
            .chain(&registration.exclude_patterns)
            .any(|p| p.trim().is_empty())
        {
            return Err(InterceptError::EmptyPattern);
        }

        let mut mapped = MappedInterceptor::new(
            registration.include_patterns,
            registration.exclude_patterns,
            registration.interceptor,
        );
        mapped.set_path_matcher(registration.matcher);

        // Insert keeping ascending order; equal orders keep registration order.
        let pos = self
            .entries
            .partition_point(|e| e.order <= registration.order);
        self.entries.insert(
            pos,
            Entry {
                order: registration.order,
                mapped: Arc::new(mapped),
            },
        );
        Ok(())
    }

    /// All mapped interceptors in execution order.
    pub fn mapped_interceptors(&self) -> impl Iterator<Item = &Arc<MappedInterceptor>> {
        self.entries.iter().map(|e| &e.mapped)
    }

    /// Build the per-request execution chain for the given lookup path:
    /// every interceptor whose [`matches`](MappedInterceptor::matches) scope
    /// covers the path, in execution order.
    pub fn chain_for(&self, lookup_path: &str) -> ExecutionChain {
        let applying = self
            .entries
            .iter()
            .filter(|e| e.mapped.matches(lookup_path, self.default_matcher.as_ref()))
            .map(|e| Arc::clone(&e.mapped))
            .collect();
        ExecutionChain::new(applying)
    }
}

impl Default for InterceptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wicket_kernel::types::{Exchange, HandlerRef};

    struct Named(&'static str);

    #[async_trait]
    impl HandlerInterceptor for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn pre_handle(
            &self,
            _exchange: &mut Exchange,
            _handler: &HandlerRef,
        ) -> Result<bool, InterceptError> {
            Ok(true)
        }
    }

    fn reg(name: &'static str) -> InterceptorRegistration {
        InterceptorRegistration::new(Arc::new(Named(name)))
    }

    #[test]
    fn chain_contains_only_applying_interceptors() {
        let mut registry = InterceptorRegistry::new();
        registry
            .add(reg("admin-only").include_patterns(["/admin/**"]))
            .unwrap();
        registry
            .add(reg("global").exclude_patterns(["/health"]))
            .unwrap();

        assert_eq!(registry.chain_for("/admin/users").len(), 2);
        assert_eq!(registry.chain_for("/public/x").len(), 1);
        assert_eq!(registry.chain_for("/health").len(), 0);
    }

    #[test]
    fn interceptors_run_in_order_value_then_registration_order() {
        let mut registry = InterceptorRegistry::new();
        registry.add(reg("late").order(10)).unwrap();
        registry.add(reg("early").order(-5)).unwrap();
        registry.add(reg("middle-a")).unwrap();
        registry.add(reg("middle-b")).unwrap();

        let names: Vec<&str> = registry
            .mapped_interceptors()
            .map(|m| m.interceptor().name())
            .collect();
        assert_eq!(names, vec!["early", "middle-a", "middle-b", "late"]);
    }

    #[test]
    fn blank_pattern_is_rejected() {
        let mut registry = InterceptorRegistry::new();
        let err = registry
            .add(reg("x").include_patterns(["  "]))
            .unwrap_err();
        assert_eq!(err, InterceptError::EmptyPattern);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = InterceptorRegistry::new();
        registry.add(reg("dup")).unwrap();
        let err = registry.add(reg("dup")).unwrap_err();
        assert_eq!(err, InterceptError::DuplicateInterceptor("dup".to_string()));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = InterceptorRegistry::new();
        let err = registry.add(reg(" ")).unwrap_err();
        assert_eq!(err, InterceptError::EmptyInterceptorName);
    }

    #[test]
    fn per_registration_matcher_overrides_registry_default() {
        // A matcher that only ever matches the literal pattern string.
        struct LiteralOnly;
        impl PathMatcher for LiteralOnly {
            fn matches(&self, pattern: &str, path: &str) -> bool {
                pattern == path
            }
        }

        let mut registry = InterceptorRegistry::new();
        registry
            .add(
                reg("strict")
                    .include_patterns(["/a/**"])
                    .with_matcher(Arc::new(LiteralOnly)),
            )
            .unwrap();

        // The Ant default would match "/a/x"; the literal override does not.
        assert_eq!(registry.chain_for("/a/x").len(), 0);
        assert_eq!(registry.chain_for("/a/**").len(), 1);
    }
}
