//! Resource client for the Heroku API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that drives any
//! [`Resource`](crate::Resource) through create, info, update, destroy and
//! list.
//!
//! # Overview
//!
//! - [`RestClient`]: The CRUD client
//! - [`RestError`]: Error type for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::RestClient;
//!
//! let client = RestClient::new("https://:my-token@api.heroku.com")?;
//!
//! let mut app = App { name: "myapp".to_string(), ..Default::default() };
//! client.info(&mut app).await?;
//!
//! app.stack = "heroku-24".to_string();
//! client.update(&app).await?;
//! client.destroy(&app).await?;
//! ```
//!
//! # Paths
//!
//! - `info`, `update` and `destroy` use the resource's own path.
//! - `create` strips the last segment: `/apps/myapp` posts to `/apps/`.
//! - `list` asks a default instance of the element type for its path and
//!   strips the last segment the same way.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
