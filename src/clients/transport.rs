//! Pluggable transport for executing requests.
//!
//! The client never talks to the network directly. It hands a fully built
//! [`reqwest::Request`] to a [`Transport`] and decodes whatever comes back.
//! TLS, connection pooling, proxies, timeouts and retries are the
//! transport's business.

use std::future::Future;

use reqwest::{Request, Response};

/// Executes one request and returns one response.
///
/// Implemented for [`reqwest::Client`], which is the default transport. A
/// custom transport can wrap a client to add timeouts, retries, logging or
/// URL rewriting.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use heroku_api::clients::{Request, Response, Transport};
///
/// /// Counts requests before delegating to reqwest.
/// struct Counting {
///     inner: reqwest::Client,
///     sent: std::sync::atomic::AtomicUsize,
/// }
///
/// impl Transport for Counting {
///     fn execute(
///         &self,
///         request: Request,
///     ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
///         self.sent.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///         self.inner.execute(request)
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and resolves to the response or a network error.
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send;
}

impl Transport for reqwest::Client {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        reqwest::Client::execute(self, request)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        (**self).execute(request)
    }
}
