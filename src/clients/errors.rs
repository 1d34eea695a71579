//! HTTP-specific error types for the Heroku API client.
//!
//! This module contains error types for the request/response layer:
//! building a request, executing it, classifying the status, and decoding
//! the body.
//!
//! # Error Handling
//!
//! - [`BuildError`]: The request could not be built (payload serialization, URL, headers)
//! - [`HttpStatusError`]: Non-2xx HTTP responses from the API
//! - [`DecodeError`]: The response body could not be copied or parsed
//! - [`HttpError`]: Unified error type encompassing all of the above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use heroku_api::clients::{HttpError, Payload, Sink};
//!
//! match client.call(Method::GET, "/apps/myapp", Payload::<()>::Absent, Sink::Json(&mut app)).await {
//!     Ok(()) => println!("Fetched {}", app.name),
//!     Err(HttpError::Status(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Bad response body: {e}"),
//!     Err(HttpError::Build(e)) => println!("Could not build request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request cannot be built.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The JSON payload could not be serialized.
    #[error("Failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request URL is not a valid URL.
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The path is not rooted at `/`, so it would change the request host.
    #[error("Request path '{path}' must start with '/'")]
    UnrootedPath {
        /// The offending path.
        path: String,
    },

    /// A header value contains characters that cannot be sent.
    #[error("Invalid value for header '{name}'")]
    InvalidHeader {
        /// The header name.
        name: &'static str,
        /// The underlying header error.
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}

/// Error returned when a request receives a non-successful response.
///
/// The body is captured as text for diagnostics; it is never decoded as JSON.
///
/// # Example
///
/// ```rust
/// use heroku_api::clients::HttpStatusError;
///
/// let error = HttpStatusError {
///     code: 404,
///     status: "404 Not Found".to_string(),
///     message: r#"{"id":"not_found","message":"Couldn't find that app."}"#.to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "Bad status: 404 Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Bad status: {status}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status line, e.g. `404 Not Found`.
    pub status: String,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the `Request-Id` header).
    pub request_id: Option<String>,
}

/// Error returned when a successful response body cannot be delivered to its sink.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the response body failed.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// Writing the response body into a raw sink failed.
    #[error("Failed to write response body: {0}")]
    Write(#[source] std::io::Error),

    /// The response body is not valid JSON for the requested type.
    #[error("Failed to decode response body: {0}")]
    Json(#[source] serde_json::Error),
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Network or connection error, passed through from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Status(#[from] HttpStatusError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl HttpError {
    /// Returns the HTTP status code if this is a status error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns the request ID if the API supplied one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Status(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> HttpStatusError {
        HttpStatusError {
            code: 404,
            status: "404 Not Found".to_string(),
            message: r#"{"id":"not_found"}"#.to_string(),
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn test_status_error_includes_status_line_in_message() {
        assert_eq!(not_found().to_string(), "Bad status: 404 Not Found");
    }

    #[test]
    fn test_http_error_exposes_status_code_and_request_id() {
        let error = HttpError::from(not_found());
        assert_eq!(error.status_code(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
        assert_eq!(error.to_string(), "Bad status: 404 Not Found");
    }

    #[test]
    fn test_build_error_wraps_serialization_failure() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = HttpError::from(BuildError::Serialize(source));
        assert!(error.to_string().contains("Failed to serialize request payload"));
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = HttpError::from(DecodeError::Json(source));
        assert!(error.to_string().starts_with("Failed to decode response body"));
        assert!(error.request_id().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let status: &dyn std::error::Error = &not_found();
        let _ = status;

        let decode: &dyn std::error::Error =
            &DecodeError::Write(std::io::Error::other("disk full"));
        let _ = decode;
    }
}
