//! Per-request interceptor execution chain.
//!
//! The dispatch layer obtains a chain from
//! [`InterceptorRegistry::chain_for`](crate::registry::InterceptorRegistry::chain_for)
//! and drives it around the handler invocation:
//!
//! ```text
//! pre_handle:        A ──► B ──► C        (execution order)
//!                        (handler runs)
//! post_handle:       C ──► B ──► A        (reverse order)
//! after_completion:  C ──► B ──► A        (reverse, from last successful pre)
//! ```
//!
//! A veto or error during pre-handling fires `after_completion` on the
//! interceptors whose `pre_handle` already succeeded, in reverse, before
//! control returns to the caller.  Failures raised *inside*
//! `after_completion` are logged and swallowed so one broken observer cannot
//! mask the primary outcome.

use crate::mapped::MappedInterceptor;
use std::sync::Arc;
use tracing::{debug, warn};
use wicket_kernel::error::InterceptError;
use wicket_kernel::interceptor::HandlerInterceptor;
use wicket_kernel::types::{Exchange, HandlerRef, ModelView};

/// The interceptors applying to one request, in execution order, plus the
/// progress cursor needed for completion rollback.
pub struct ExecutionChain {
    interceptors: Vec<Arc<MappedInterceptor>>,
    /// Index of the last interceptor whose `pre_handle` returned `Ok(true)`.
    interceptor_index: Option<usize>,
}

impl ExecutionChain {
    /// Build a chain over the given interceptors (already in execution order).
    pub fn new(interceptors: Vec<Arc<MappedInterceptor>>) -> Self {
        Self {
            interceptors,
            interceptor_index: None,
        }
    }

    /// Number of interceptors in this chain.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// `true` if no interceptor applies to this request.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run `pre_handle` on every interceptor in execution order.
    ///
    /// Returns `Ok(true)` when all interceptors continued.  On the first veto
    /// (`Ok(false)`) or error, fires [`trigger_after_completion`](Self::trigger_after_completion)
    /// on the already-succeeded interceptors and returns the veto or error to
    /// the caller — the handler must not run in either case.
    pub async fn apply_pre_handle(
        &mut self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
    ) -> Result<bool, InterceptError> {
        for (index, interceptor) in self.interceptors.iter().enumerate() {
            match interceptor.pre_handle(exchange, handler).await {
                Ok(true) => {
                    self.interceptor_index = Some(index);
                }
                Ok(false) => {
                    debug!(
                        interceptor = interceptor.name(),
                        path = %exchange.request.path,
                        "request vetoed during pre-handling"
                    );
                    self.trigger_after_completion(exchange, handler, None).await;
                    return Ok(false);
                }
                Err(err) => {
                    self.trigger_after_completion(exchange, handler, Some(&err))
                        .await;
                    return Err(err);
                }
            }
        }
        Ok(true)
    }

    /// Run `post_handle` on every interceptor in reverse execution order.
    ///
    /// Only valid after a fully successful [`apply_pre_handle`](Self::apply_pre_handle)
    /// and a successful handler invocation.
    pub async fn apply_post_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
        model: Option<&ModelView>,
    ) -> Result<(), InterceptError> {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.post_handle(exchange, handler, model).await?;
        }
        Ok(())
    }

    /// Run `after_completion` in reverse order on every interceptor whose
    /// `pre_handle` succeeded.
    ///
    /// Individual failures are logged and swallowed: completion callbacks are
    /// observers and must all get their turn.
    pub async fn trigger_after_completion(
        &self,
        exchange: &Exchange,
        handler: &HandlerRef,
        failure: Option<&InterceptError>,
    ) {
        let Some(last) = self.interceptor_index else {
            return;
        };
        for interceptor in self.interceptors[..=last].iter().rev() {
            if let Err(err) = interceptor
                .after_completion(exchange, handler, failure)
                .await
            {
                warn!(
                    interceptor = interceptor.name(),
                    error = %err,
                    "after_completion callback failed"
                );
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
