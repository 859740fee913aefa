//! Interceptor capability traits.
//!
//! An interceptor observes and can veto the handling of a request at three
//! points in its lifecycle:
//!
//! ```text
//! Request ──► pre_handle ──► (handler runs) ──► post_handle ──► response
//!                                                    │
//!                  after_completion  ◄───────────────┘ (always, success or failure)
//! ```
//!
//! Two shapes exist.  [`HandlerInterceptor`] is the full contract: it sees
//! the whole [`Exchange`] plus the resolved handler and may veto processing.
//! [`WebRequestInterceptor`] is a request-scoped alternate shape for
//! interceptors that only care about the inbound request; the runtime crate
//! adapts it into a `HandlerInterceptor` with a fixed adapter.

use crate::error::InterceptError;
use crate::types::{Exchange, HandlerRef, InterceptRequest, ModelView};
use async_trait::async_trait;

/// Kernel contract for a request-handling interceptor.
///
/// Implementations must be `Send + Sync` so they can be shared across Tokio
/// tasks without additional synchronization by the caller.
#[async_trait]
pub trait HandlerInterceptor: Send + Sync {
    /// Stable, human-readable identifier for this interceptor (used in logs).
    fn name(&self) -> &str;

    /// Called *before* the resolved handler runs.
    ///
    /// Implementations may mutate the exchange (resolve a principal, stamp
    /// attributes, rewrite headers, …).  Return `Ok(true)` to continue
    /// processing, `Ok(false)` to veto it — the dispatch layer then skips the
    /// handler and all remaining interceptors.
    async fn pre_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
    ) -> Result<bool, InterceptError>;

    /// Called after the handler ran successfully, *before* the response is
    /// rendered, with the view model the handler produced (if any).
    async fn post_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
        model: Option<&ModelView>,
    ) -> Result<(), InterceptError> {
        let _ = (exchange, handler, model);
        Ok(())
    }

    /// Called once handling finished, on both the success and the failure
    /// path.  `failure` carries the error that aborted processing, if any.
    async fn after_completion(
        &self,
        exchange: &Exchange,
        handler: &HandlerRef,
        failure: Option<&InterceptError>,
    ) -> Result<(), InterceptError> {
        let _ = (exchange, handler, failure);
        Ok(())
    }
}

/// Alternate interceptor shape scoped to the inbound request only.
///
/// It has no veto power and never sees the resolved handler — suitable for
/// request preparation and cleanup concerns.  Adapted into a
/// [`HandlerInterceptor`] by the runtime crate's fixed adapter.
#[async_trait]
pub trait WebRequestInterceptor: Send + Sync {
    /// Stable, human-readable identifier for this interceptor (used in logs).
    fn name(&self) -> &str;

    /// Called before the handler runs.  Cannot veto processing.
    async fn pre_handle(&self, request: &mut InterceptRequest) -> Result<(), InterceptError>;

    /// Called after the handler ran successfully.
    async fn post_handle(
        &self,
        request: &mut InterceptRequest,
        model: Option<&ModelView>,
    ) -> Result<(), InterceptError> {
        let _ = (request, model);
        Ok(())
    }

    /// Called once handling finished, on both the success and failure path.
    async fn after_completion(
        &self,
        request: &InterceptRequest,
        failure: Option<&InterceptError>,
    ) -> Result<(), InterceptError> {
        let _ = (request, failure);
        Ok(())
    }
}
