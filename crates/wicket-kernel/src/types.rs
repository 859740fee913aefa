//! Core data types for the interceptor kernel contract.
//!
//! These types are shared across the interceptor traits
//! ([`HandlerInterceptor`](super::interceptor::HandlerInterceptor),
//! [`WebRequestInterceptor`](super::interceptor::WebRequestInterceptor),
//! [`PathMatcher`](super::matcher::PathMatcher))
//! and carry no runtime dependencies beyond `serde` and `std`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// HTTP primitives
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP method, covering the standard verbs seen at a dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Case-insensitive parse from a string slice.
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "PATCH" => Some(HttpMethod::Patch),
            "DELETE" => Some(HttpMethod::Delete),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    /// Return the standard uppercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / Response
// ─────────────────────────────────────────────────────────────────────────────

/// An inbound request flowing through the dispatch layer.
///
/// All fields use owned, allocation-friendly types so the struct can be sent
/// across async task boundaries without lifetime complications.
///
/// `path` is the *lookup path*: already normalized and decoded by the caller.
/// Interceptor scoping performs no normalization of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptRequest {
    /// Unique identifier for correlating this request across logs and traces.
    pub id: String,
    /// Normalized request path, e.g. `/admin/users`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// HTTP headers (header names are lowercased).
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl InterceptRequest {
    /// Construct a minimal request with the given id, path, and method.
    pub fn new(id: impl Into<String>, path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            method,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Builder helper: attach a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Builder helper: set the body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }
}

/// The outbound response being produced for a request.
///
/// Interceptors may inspect and mutate it during `post_handle` and read it
/// during `after_completion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptResponse {
    /// HTTP status code (100–599).
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl InterceptResponse {
    /// Construct a minimal response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Builder helper: attach a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Builder helper: set the body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }
}

impl Default for InterceptResponse {
    fn default() -> Self {
        Self::new(200)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handler reference
// ─────────────────────────────────────────────────────────────────────────────

/// Lightweight descriptor of the handler resolved for a request.
///
/// The dispatch layer forwards it opaquely through the interceptor lifecycle;
/// interceptors may use the id and metadata for logging or policy decisions
/// but never invoke the handler themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRef {
    /// Stable identifier of the resolved handler.
    pub id: String,
    /// Free-form descriptive metadata (controller name, operation id, …).
    pub metadata: HashMap<String, String>,
}

impl HandlerRef {
    /// Construct a handler reference with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: HashMap::new(),
        }
    }

    /// Builder helper: attach a metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View model
// ─────────────────────────────────────────────────────────────────────────────

/// The view model a handler produced, available to `post_handle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelView {
    /// Logical view name selected by the handler.
    pub view: String,
    /// Model attributes rendered into the view.
    pub model: HashMap<String, serde_json::Value>,
}

impl ModelView {
    /// Construct an empty model for the given view name.
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            model: HashMap::new(),
        }
    }

    /// Builder helper: attach a model attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.model.insert(key.into(), value);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange
// ─────────────────────────────────────────────────────────────────────────────

/// Mutable context that flows through the interceptor lifecycle for a single
/// request.
///
/// Interceptors read from and write to the exchange, enabling downstream
/// interceptors to access decisions made by upstream ones (e.g. the principal
/// set by an authentication interceptor can be read by the access logger).
#[derive(Debug, Clone)]
pub struct Exchange {
    /// The inbound request.
    pub request: InterceptRequest,
    /// The response being produced.
    pub response: InterceptResponse,
    /// Identity principal resolved during pre-handling; `None` if anonymous.
    pub principal: Option<String>,
    /// Free-form attributes written and read by interceptors.
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Exchange {
    /// Create a fresh exchange from an inbound request.
    pub fn new(request: InterceptRequest) -> Self {
        Self {
            request,
            response: InterceptResponse::default(),
            principal: None,
            attributes: HashMap::new(),
        }
    }

    /// Convenience: read a typed attribute, returning `None` if absent or
    /// if deserialization fails.
    pub fn get_attr<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Convenience: write a serializable attribute.
    pub fn set_attr<T: serde::Serialize>(&mut self, key: impl Into<String>, val: &T) {
        if let Ok(v) = serde_json::to_value(val) {
            self.attributes.insert(key.into(), v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_lowercased() {
        let req = InterceptRequest::new("r1", "/x", HttpMethod::Get)
            .with_header("X-Trace-Id", "abc");
        assert_eq!(req.headers.get("x-trace-id").unwrap(), "abc");
    }

    #[test]
    fn method_parse_round_trip() {
        assert_eq!(HttpMethod::from_str_ci("post"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::from_str_ci("TRACE"), None);
    }

    #[test]
    fn exchange_attrs_round_trip() {
        let mut ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        ex.set_attr("count", &7u64);
        assert_eq!(ex.get_attr::<u64>("count"), Some(7));
        assert_eq!(ex.get_attr::<u64>("missing"), None);
    }

    #[test]
    fn default_response_is_200() {
        let ex = Exchange::new(InterceptRequest::new("r1", "/x", HttpMethod::Get));
        assert_eq!(ex.response.status, 200);
    }
}
