//! Error type for resource operations.
//!
//! # Error Handling
//!
//! - [`RestError::Config`]: The session URL or configuration was rejected
//! - [`RestError::InvalidPath`]: A resource path has no collection part
//! - [`RestError::TypeContract`]: A resource type reports an unrooted path
//! - [`RestError::Http`]: Wraps request building, transport, status and decode errors
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::RestError;
//!
//! match client.info(&mut app).await {
//!     Ok(()) => println!("App: {}", app.name),
//!     Err(e) if e.is_not_found() => println!("No such app"),
//!     Err(e) => println!("Failed ({:?}): {}", e.request_id(), e),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use heroku_api::RestError;
///
/// let error = RestError::InvalidPath { path: "apps".to_string() };
/// assert!(error.to_string().contains("apps"));
/// assert_eq!(error.status_code(), None);
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resource path contains no `/`, so no collection can be derived.
    #[error("Invalid resource path '{path}': it has no '/' separator")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// A resource type's default instance reports a path that is not rooted
    /// at `/`, so its collection cannot be listed.
    #[error("Resource type '{type_name}' reported path '{path}', which is not rooted at '/'")]
    TypeContract {
        /// The Rust type name of the resource.
        type_name: String,
        /// The path its default instance reported.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code if the API rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the API's request identifier if one came back with the error.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.request_id(),
            _ => None,
        }
    }

    /// Returns `true` if the API answered `404 Not Found`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404))
    }
}
