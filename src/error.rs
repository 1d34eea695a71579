//! Error types for the Heroku API client.
//!
//! This module contains error types used for configuration and validation
//! errors. Request, transport and resource errors live next to the clients
//! that produce them.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use heroku_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API host cannot be empty.
    #[error("API host cannot be empty. Please provide a host such as 'api.heroku.com'.")]
    EmptyHost,

    /// API host is malformed.
    #[error("Invalid API host '{host}'. Expected a bare host name with an optional port (e.g., 'api.heroku.com' or 'localhost:5000').")]
    InvalidHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Heroku API token.")]
    EmptyApiToken,

    /// The session URL could not be parsed.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// The session URL does not use the `https` scheme.
    #[error("Invalid scheme '{scheme}'. The Heroku API is only reachable over https.")]
    InvalidScheme {
        /// The scheme that was provided.
        scheme: String,
    },

    /// The user agent prefix cannot be sent as an HTTP header value.
    #[error("Invalid user agent prefix '{prefix}'. It must only contain visible ASCII characters.")]
    InvalidUserAgentPrefix {
        /// The prefix that was provided.
        prefix: String,
    },
}
