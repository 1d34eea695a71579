//! Resource client for the Heroku API.
//!
//! This module provides the [`RestClient`] type, which drives any
//! [`Resource`] through the five CRUD operations by combining the
//! resource's path with the [`HttpClient`] request builder and response
//! decoder.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, Payload, Sink, Transport};
use crate::config::ClientConfig;
use crate::rest::{collection_path, list_path, Resource};

/// Generic CRUD client for Heroku API resources.
///
/// Every operation issues exactly one request and writes the result back
/// into the caller's value. Paths are derived from the value:
///
/// | Operation | Method   | Path                         | Response              |
/// |-----------|----------|------------------------------|-----------------------|
/// | `info`    | `GET`    | `resource.path()`            | decoded into resource |
/// | `create`  | `POST`   | collection of `resource.path()` | decoded into resource |
/// | `update`  | `PATCH`  | `resource.path()`            | discarded             |
/// | `destroy` | `DELETE` | `resource.path()`            | discarded             |
/// | `list`    | `GET`    | collection of the element type | decoded into the vec |
///
/// Nothing is retried and nothing is rolled back; a failed call leaves the
/// caller's value as it was.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use heroku_api::{RestClient, Resource};
///
/// let client = RestClient::new("https://:my-token@api.heroku.com")?;
///
/// let mut app = App { name: "myapp".to_string(), ..Default::default() };
/// client.create(&mut app).await?;
/// println!("created {}", app.id);
///
/// let mut apps: Vec<App> = Vec::new();
/// client.list(&mut apps).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient<T = reqwest::Client> {
    http_client: HttpClient<T>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client from a session URL such as `https://:<token>@api.heroku.com`.
    ///
    /// An empty URL targets `api.heroku.com` without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the URL is rejected, or
    /// [`RestError::Http`] if the default transport cannot be created.
    pub fn new(url: &str) -> Result<Self, RestError> {
        Self::from_config(ClientConfig::from_url(url)?)
    }

    /// Creates a client from an existing configuration using the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the default transport cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self, RestError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client that executes requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            http_client: HttpClient::with_transport(config, transport),
        }
    }

    /// Returns the underlying HTTP client, for requests outside the CRUD set.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient<T> {
        &self.http_client
    }

    /// Fetches `resource` from its own path and replaces it with the response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails, the API answers
    /// with a non-2xx status, or the body does not decode into `R`.
    pub async fn info<R>(&self, resource: &mut R) -> Result<(), RestError>
    where
        R: Resource + DeserializeOwned,
    {
        let path = resource.path();
        tracing::debug!("Fetching resource at {}", path);

        self.http_client
            .call(
                HttpMethod::Get,
                &path,
                Payload::<()>::Absent,
                Sink::Json(resource),
            )
            .await?;
        Ok(())
    }

    /// Posts `resource` to its collection and replaces it with the response.
    ///
    /// Server-assigned fields such as the id are populated in place.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the resource path has no
    /// collection part, or [`RestError::Http`] if the request fails.
    pub async fn create<R>(&self, resource: &mut R) -> Result<(), RestError>
    where
        R: Resource + Serialize + DeserializeOwned,
    {
        let path = collection_path(&resource.path())?;
        tracing::debug!("Creating resource in {}", path);

        let request =
            self.http_client
                .new_request(HttpMethod::Post, &path, Payload::Json(&*resource))?;
        self.http_client
            .send(request, Sink::Json(resource))
            .await?;
        Ok(())
    }

    /// Patches `resource` at its own path. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails or the API answers
    /// with a non-2xx status.
    pub async fn update<R>(&self, resource: &R) -> Result<(), RestError>
    where
        R: Resource + Serialize + ?Sized,
    {
        let path = resource.path();
        tracing::debug!("Updating resource at {}", path);

        self.http_client
            .call(
                HttpMethod::Patch,
                &path,
                Payload::Json(resource),
                Sink::<()>::Discard,
            )
            .await?;
        Ok(())
    }

    /// Deletes `resource` at its own path. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails or the API answers
    /// with a non-2xx status.
    pub async fn destroy<R>(&self, resource: &R) -> Result<(), RestError>
    where
        R: Resource + ?Sized,
    {
        let path = resource.path();
        tracing::debug!("Destroying resource at {}", path);

        self.http_client
            .call(
                HttpMethod::Delete,
                &path,
                Payload::<()>::Absent,
                Sink::<()>::Discard,
            )
            .await?;
        Ok(())
    }

    /// Lists the collection of `R` and replaces the contents of `items`.
    ///
    /// The endpoint comes from the element type, so `items` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::TypeContract`] if `R::default()` reports an
    /// unrooted path, or [`RestError::Http`] if the request fails or the
    /// body is not a JSON array of `R`.
    pub async fn list<R>(&self, items: &mut Vec<R>) -> Result<(), RestError>
    where
        R: Resource + Default + DeserializeOwned,
    {
        let path = list_path::<R>()?;
        tracing::debug!("Listing resources in {}", path);

        self.http_client
            .call(
                HttpMethod::Get,
                &path,
                Payload::<()>::Absent,
                Sink::Json(items),
            )
            .await?;
        Ok(())
    }
}
