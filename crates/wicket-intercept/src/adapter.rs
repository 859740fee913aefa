//! Fixed adapter from the request-scoped interceptor shape to the full one.

use std::sync::Arc;
use wicket_kernel::error::InterceptError;
use wicket_kernel::interceptor::{HandlerInterceptor, WebRequestInterceptor};
use wicket_kernel::types::{Exchange, HandlerRef, ModelView};

/// Adapts a [`WebRequestInterceptor`] into the [`HandlerInterceptor`] shape.
///
/// The delegate only sees the request portion of the exchange.  Since the
/// request-scoped shape has no veto power, a successful `pre_handle` always
/// continues processing.
pub struct WebRequestAdapter {
    delegate: Arc<dyn WebRequestInterceptor>,
}

impl WebRequestAdapter {
    /// Wrap the given request-scoped interceptor.
    pub fn new(delegate: Arc<dyn WebRequestInterceptor>) -> Self {
        Self { delegate }
    }
}

#[async_trait::async_trait]
impl HandlerInterceptor for WebRequestAdapter {
    fn name(&self) -> &str {
        self.delegate.name()
    }

    async fn pre_handle(
        &self,
        exchange: &mut Exchange,
        _handler: &HandlerRef,
    ) -> Result<bool, InterceptError> {
        self.delegate.pre_handle(&mut exchange.request).await?;
        Ok(true)
    }

    async fn post_handle(
        &self,
        exchange: &mut Exchange,
        _handler: &HandlerRef,
        model: Option<&ModelView>,
    ) -> Result<(), InterceptError> {
        self.delegate.post_handle(&mut exchange.request, model).await
    }

    async fn after_completion(
        &self,
        exchange: &Exchange,
        _handler: &HandlerRef,
        failure: Option<&InterceptError>,
    ) -> Result<(), InterceptError> {
        self.delegate
            .after_completion(&exchange.request, failure)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wicket_kernel::types::{HttpMethod, InterceptRequest};

    struct TaggingInterceptor {
        after: AtomicUsize,
    }

    #[async_trait]
    impl WebRequestInterceptor for TaggingInterceptor {
        fn name(&self) -> &str {
            "tagging"
        }

        async fn pre_handle(&self, request: &mut InterceptRequest) -> Result<(), InterceptError> {
            request
                .headers
                .insert("x-tagged".to_string(), "yes".to_string());
            Ok(())
        }

        async fn after_completion(
            &self,
            request: &InterceptRequest,
            failure: Option<&InterceptError>,
        ) -> Result<(), InterceptError> {
            assert_eq!(request.headers.get("x-tagged").unwrap(), "yes");
            assert!(failure.is_some());
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingInterceptor;

    #[async_trait]
    impl WebRequestInterceptor for FailingInterceptor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn pre_handle(&self, _request: &mut InterceptRequest) -> Result<(), InterceptError> {
            Err(InterceptError::interceptor("failing", "nope"))
        }
    }

    #[tokio::test]
    async fn successful_pre_handle_continues() {
        let adapter = WebRequestAdapter::new(Arc::new(TaggingInterceptor {
            after: AtomicUsize::new(0),
        }));
        let mut ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        let handler = HandlerRef::new("h1");

        assert!(adapter.pre_handle(&mut ex, &handler).await.unwrap());
        assert_eq!(ex.request.headers.get("x-tagged").unwrap(), "yes");
    }

    #[tokio::test]
    async fn delegate_error_propagates() {
        let adapter = WebRequestAdapter::new(Arc::new(FailingInterceptor));
        let mut ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        let handler = HandlerRef::new("h1");

        let err = adapter.pre_handle(&mut ex, &handler).await.unwrap_err();
        assert_eq!(err, InterceptError::interceptor("failing", "nope"));
    }

    #[tokio::test]
    async fn after_completion_sees_request_and_failure() {
        let inner = Arc::new(TaggingInterceptor {
            after: AtomicUsize::new(0),
        });
        let adapter = WebRequestAdapter::new(inner.clone());
        let mut ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        let handler = HandlerRef::new("h1");

        adapter.pre_handle(&mut ex, &handler).await.unwrap();
        let failure = InterceptError::interceptor("other", "bang");
        adapter
            .after_completion(&ex, &handler, Some(&failure))
            .await
            .unwrap();
        assert_eq!(inner.after.load(Ordering::SeqCst), 1);
    }
}
