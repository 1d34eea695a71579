//! HTTP client types for Heroku API communication.
//!
//! This module provides the client layer that turns resources into
//! authenticated requests and responses back into resources.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Builds requests, executes them, decodes responses
//! - [`Transport`]: The pluggable executor behind [`HttpClient`]
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`Payload`]: What goes into a request body
//! - [`Sink`]: Where a response body goes
//! - [`rest::RestClient`]: Generic CRUD client for [`Resource`](crate::Resource) values
//! - [`rest::RestError`]: Error type for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::clients::{HttpClient, HttpMethod, Payload, Sink};
//! use heroku_api::ClientConfig;
//!
//! let client = HttpClient::new(ClientConfig::from_url("https://:token@api.heroku.com")?)?;
//!
//! // Structured request and response
//! let mut account = serde_json::Value::Null;
//! client
//!     .call(HttpMethod::Get, "/account", Payload::<()>::Absent, Sink::Json(&mut account))
//!     .await?;
//!
//! // Raw bytes, e.g. a log stream
//! let mut log: Vec<u8> = Vec::new();
//! client
//!     .call(HttpMethod::Get, "/apps/myapp/logs", Payload::<()>::Absent, Sink::<()>::Raw(&mut log))
//!     .await?;
//! ```
//!
//! # Error Classification
//!
//! Any status outside 200..=299 is an error and its body is never decoded.
//! Nothing is retried; wrap the transport if retries are wanted.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{BuildError, DecodeError, HttpError, HttpStatusError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, Payload, ACCEPT_VERSION, JSON_CONTENT_TYPE};
pub use http_response::{decode, Sink, REQUEST_ID_HEADER};
pub use transport::Transport;

pub use reqwest::{Request, Response};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
