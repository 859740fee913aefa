//! Built-in interceptors.

mod access_log;

pub use access_log::AccessLogInterceptor;
