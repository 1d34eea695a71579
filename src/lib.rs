//! # Heroku API Rust Client
//!
//! A generic client for the Heroku Platform API: a resource-oriented
//! HTTP+JSON API where every entity lives at a path and collections live
//! one segment up.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the API host and token
//! - The [`Resource`] trait, the only thing an entity type has to implement
//! - [`RestClient`], which runs `info`, `create`, `update`, `destroy` and
//!   `list` for any resource
//! - [`HttpClient`], the request builder and response decoder underneath
//! - A pluggable [`Transport`] with `reqwest` as the default
//!
//! ## Quick Start
//!
//! ```rust
//! use heroku_api::{ClientConfig, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct App {
//!     #[serde(default, skip_serializing_if = "String::is_empty")]
//!     id: String,
//!     #[serde(default, skip_serializing_if = "String::is_empty")]
//!     name: String,
//! }
//!
//! impl Resource for App {
//!     fn path(&self) -> String {
//!         let key = if self.id.is_empty() { &self.name } else { &self.id };
//!         heroku_api::rest::join_path(&["apps", key.as_str()])
//!     }
//! }
//!
//! let config = ClientConfig::from_url("https://:my-token@api.heroku.com").unwrap();
//! assert_eq!(config.host().as_ref(), "api.heroku.com");
//! assert_eq!(App::default().path(), "/apps/");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use heroku_api::RestClient;
//!
//! let client = RestClient::new("https://:my-token@api.heroku.com")?;
//!
//! let mut app = App { name: "myapp".to_string(), ..Default::default() };
//! client.create(&mut app).await?;   // POST /apps/, id filled in
//! client.info(&mut app).await?;     // GET /apps/<id>
//! client.update(&app).await?;       // PATCH /apps/<id>
//! client.destroy(&app).await?;      // DELETE /apps/<id>
//!
//! let mut apps: Vec<App> = Vec::new();
//! client.list(&mut apps).await?;    // GET /apps/
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`RestError`]. Non-2xx responses surface as
//! [`HttpError::Status`] with the status line, the raw body and the
//! `Request-Id` header; they are never decoded as JSON.
//!
//! ## Logging
//!
//! The crate emits `tracing` events at debug level for each request and each
//! failed status. Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: every call goes through an explicit client value
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **One round trip per call**: nothing is retried or rolled back

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ApiToken, ClientConfig, ClientConfigBuilder, DEFAULT_HOST};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, Payload, RestClient, RestError, Sink, Transport,
};

pub use rest::Resource;
