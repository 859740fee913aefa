//! Structured access-logging interceptor.
//!
//! Emits `tracing` events on the pre-handle and completion paths, recording
//! request id, method, path, handler, principal, response status, outcome,
//! and round-trip latency.

use async_trait::async_trait;
use tracing::{error, info};
use wicket_kernel::error::InterceptError;
use wicket_kernel::interceptor::HandlerInterceptor;
use wicket_kernel::types::{Exchange, HandlerRef};

/// Access logger — records inbound requests and their final outcome.
#[derive(Default)]
pub struct AccessLogInterceptor;

impl AccessLogInterceptor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HandlerInterceptor for AccessLogInterceptor {
    fn name(&self) -> &str {
        "access-log"
    }

    async fn pre_handle(
        &self,
        exchange: &mut Exchange,
        handler: &HandlerRef,
    ) -> Result<bool, InterceptError> {
        info!(
            request_id = %exchange.request.id,
            method     = exchange.request.method.as_str(),
            path       = %exchange.request.path,
            handler    = %handler.id,
            "→ inbound request"
        );
        // Record the start time for latency tracking on the completion path.
        exchange.set_attr("log.request_start_ms", &now_ms());
        Ok(true)
    }

    async fn after_completion(
        &self,
        exchange: &Exchange,
        handler: &HandlerRef,
        failure: Option<&InterceptError>,
    ) -> Result<(), InterceptError> {
        let start_ms: u64 = exchange.get_attr("log.request_start_ms").unwrap_or(0);
        let elapsed = now_ms().saturating_sub(start_ms);

        match failure {
            Some(err) => {
                error!(
                    request_id = %exchange.request.id,
                    path       = %exchange.request.path,
                    handler    = %handler.id,
                    error      = %err,
                    latency_ms = elapsed,
                    "← request failed"
                );
            }
            None => {
                info!(
                    request_id = %exchange.request.id,
                    path       = %exchange.request.path,
                    status     = exchange.response.status,
                    principal  = ?exchange.principal,
                    latency_ms = elapsed,
                    "← request completed"
                );
            }
        }
        Ok(())
    }
}

fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    u64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
    )
    .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wicket_kernel::types::{HttpMethod, InterceptRequest};

    #[tokio::test]
    async fn records_start_timestamp_and_always_continues() {
        let it = AccessLogInterceptor::new();
        let mut ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        let handler = HandlerRef::new("h1");

        assert!(it.pre_handle(&mut ex, &handler).await.unwrap());
        assert!(ex.get_attr::<u64>("log.request_start_ms").is_some());

        // Completion must succeed on both outcome paths.
        it.after_completion(&ex, &handler, None).await.unwrap();
        let failure = InterceptError::interceptor("h", "bang");
        it.after_completion(&ex, &handler, Some(&failure))
            .await
            .unwrap();
    }
}
