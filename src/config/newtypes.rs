//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use url::Url;

use super::DEFAULT_HOST;
use crate::error::ConfigError;

/// A validated API host.
///
/// The host is the authority part of the API URL: a host name or IP address
/// with an optional port. It never carries a scheme, a path or credentials.
///
/// # Example
///
/// ```rust
/// use heroku_api::ApiHost;
///
/// let host = ApiHost::new("api.heroku.com").unwrap();
/// assert_eq!(host.as_ref(), "api.heroku.com");
///
/// let local = ApiHost::new("127.0.0.1:5000").unwrap();
/// assert_eq!(local.as_ref(), "127.0.0.1:5000");
///
/// assert!(ApiHost::new("https://api.heroku.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiHost(String);

impl ApiHost {
    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if the host is empty, or
    /// [`ConfigError::InvalidHost`] if it contains a scheme, path,
    /// credentials, whitespace, or an unparseable port.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if !Self::is_valid(&host) {
            return Err(ConfigError::InvalidHost { host });
        }
        Ok(Self(host))
    }

    fn is_valid(host: &str) -> bool {
        if host.contains(&['/', '@', '?', '#'][..]) || host.chars().any(char::is_whitespace) {
            return false;
        }
        Url::parse(&format!("https://{host}")).is_ok_and(|url| url.host_str().is_some())
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self(DEFAULT_HOST.to_string())
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Heroku API token.
///
/// The token is sent as the password half of HTTP basic auth with an empty
/// username.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use heroku_api::ApiToken;
///
/// let token = ApiToken::new("01234567-89ab-cdef").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
