//! HTTP client for Heroku API communication.
//!
//! This module provides the [`HttpClient`] type, which turns a method, path
//! and [`Payload`] into an authenticated request, executes it through a
//! [`Transport`], and decodes the response into a [`Sink`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{BuildError, HttpError};
use crate::clients::http_request::{HttpMethod, Payload, ACCEPT_VERSION};
use crate::clients::http_response::{decode, Sink};
use crate::clients::transport::Transport;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Heroku API.
///
/// The client handles:
/// - URL construction as `https://<host><path>`
/// - Basic auth with an empty username and the API token as password
/// - The versioned `Accept` header and the `User-Agent` header
/// - JSON encoding of payloads and decoding of responses
///
/// It holds only read-only configuration and the transport, so one client
/// can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use heroku_api::clients::{HttpClient, HttpMethod, Payload, Sink};
/// use heroku_api::ClientConfig;
///
/// let client = HttpClient::new(ClientConfig::from_url("https://:token@api.heroku.com")?)?;
///
/// let request = client.new_request(HttpMethod::Get, "/account", Payload::<()>::Absent)?;
/// let mut account = serde_json::Value::Null;
/// client.send(request, Sink::Json(&mut account)).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient<T = reqwest::Client> {
    config: ClientConfig,
    transport: T,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client using a rustls-backed [`reqwest::Client`] as transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let transport = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a new client that executes requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Heroku API Library v{SDK_VERSION} | Rust {rust_version}");

        tracing::debug!("Heroku API client targeting {}", config.host());

        Self {
            config,
            transport,
            user_agent,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the transport used to execute requests.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds an authenticated request for `path` on the configured host.
    ///
    /// `path` must be rooted at `/`. The payload decides the body:
    ///
    /// | Payload            | Body                  | `Content-Type`       |
    /// |--------------------|-----------------------|----------------------|
    /// | `Absent`           | none                  | none                 |
    /// | `Raw(body)`        | `body` verbatim       | none                 |
    /// | `Json(&value)`     | `value` as JSON       | `application/json`   |
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if `path` does not start with `/`, the
    /// payload cannot be serialized, the URL does not parse, or a header
    /// value is invalid.
    pub fn new_request<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload<'_, P>,
    ) -> Result<Request, HttpError> {
        if !path.starts_with('/') {
            return Err(BuildError::UnrootedPath {
                path: path.to_string(),
            }
            .into());
        }

        let url = format!("https://{}{}", self.config.host(), path);
        let url = Url::parse(&url).map_err(|source| BuildError::InvalidUrl { url, source })?;

        let (body, content_type) = payload.encode()?;

        let mut request = Request::new(method.into(), url);
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, self.basic_auth()?);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|source| {
                BuildError::InvalidHeader {
                    name: "User-Agent",
                    source,
                }
            })?,
        );
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        *request.body_mut() = body;

        Ok(request)
    }

    /// Executes `request` and decodes the response into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails,
    /// [`HttpError::Status`] for non-2xx responses, and
    /// [`HttpError::Decode`] if the body cannot be delivered to the sink.
    pub async fn send<S: DeserializeOwned>(
        &self,
        request: Request,
        sink: Sink<'_, S>,
    ) -> Result<(), HttpError> {
        tracing::debug!("Sending {} {}", request.method(), request.url());

        let response = self.transport.execute(request).await?;
        decode(response, sink).await
    }

    /// Builds and sends a request in one step.
    ///
    /// # Errors
    ///
    /// Returns any error from [`new_request`](Self::new_request) or
    /// [`send`](Self::send).
    pub async fn call<P, S>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload<'_, P>,
        sink: Sink<'_, S>,
    ) -> Result<(), HttpError>
    where
        P: Serialize + ?Sized,
        S: DeserializeOwned,
    {
        let request = self.new_request(method, path, payload)?;
        self.send(request, sink).await
    }

    /// Builds the basic auth header: empty username, token as password.
    fn basic_auth(&self) -> Result<HeaderValue, BuildError> {
        let token = self.config.token().map_or("", AsRef::as_ref);
        let encoded = STANDARD.encode(format!(":{token}"));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|source| {
            BuildError::InvalidHeader {
                name: "Authorization",
                source,
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}
