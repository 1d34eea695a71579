//! Request-side types for the Heroku API client.
//!
//! This module provides the [`HttpMethod`] and [`Payload`] types used by
//! [`HttpClient::new_request`](crate::clients::HttpClient::new_request), along
//! with the fixed wire constants every request carries.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::BuildError;

/// `Accept` header pinning the API version.
pub const ACCEPT_VERSION: &str = "application/vnd.heroku+json; version=3";

/// `Content-Type` sent with JSON payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the resource API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// The body of an outgoing request.
///
/// The variant decides both the body bytes and whether a `Content-Type`
/// header is sent.
///
/// # Example
///
/// ```rust
/// use heroku_api::clients::Payload;
/// use serde_json::json;
///
/// let none = Payload::<()>::Absent;
/// let raw = Payload::<()>::Raw(b"raw bytes".to_vec().into());
/// let body = json!({"name": "myapp"});
/// let structured = Payload::Json(&body);
/// # let _ = (none, raw, structured);
/// ```
pub enum Payload<'a, T: ?Sized = ()> {
    /// No body and no `Content-Type`.
    Absent,
    /// Body sent verbatim; no `Content-Type` is set.
    Raw(reqwest::Body),
    /// Value serialized as JSON with `Content-Type: application/json`.
    Json(&'a T),
}

impl<T: Serialize + ?Sized> Payload<'_, T> {
    /// Encodes the payload into a request body and its content type.
    pub(crate) fn encode(
        self,
    ) -> Result<(Option<reqwest::Body>, Option<&'static str>), BuildError> {
        match self {
            Self::Absent => Ok((None, None)),
            Self::Raw(body) => Ok((Some(body), None)),
            Self::Json(value) => {
                let bytes = serde_json::to_vec(value).map_err(BuildError::Serialize)?;
                Ok((Some(bytes.into()), Some(JSON_CONTENT_TYPE)))
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for Payload<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Raw(body) => f.debug_tuple("Raw").field(body).finish(),
            Self::Json(_) => f.write_str("Json(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_absent_payload_has_no_body_or_content_type() {
        let (body, content_type) = Payload::<()>::Absent.encode().unwrap();
        assert!(body.is_none());
        assert!(content_type.is_none());
    }

    #[test]
    fn test_raw_payload_is_passed_through_without_content_type() {
        let (body, content_type) = Payload::<()>::Raw(b"<xml/>".to_vec().into())
            .encode()
            .unwrap();
        assert_eq!(body.unwrap().as_bytes(), Some(&b"<xml/>"[..]));
        assert!(content_type.is_none());
    }

    #[test]
    fn test_json_payload_serializes_the_supplied_value() {
        let value = json!({"name": "myapp", "maintenance": true});
        let (body, content_type) = Payload::Json(&value).encode().unwrap();

        let bytes = body.unwrap().as_bytes().unwrap().to_vec();
        let decoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(content_type, Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn test_json_payload_accepts_unsized_values() {
        let (body, _) = Payload::Json("plain").encode().unwrap();
        assert_eq!(body.unwrap().as_bytes(), Some(&b"\"plain\""[..]));
    }

    #[test]
    fn test_unserializable_payload_is_a_build_error() {
        let result = Payload::Json(&Unserializable).encode();
        assert!(matches!(result, Err(BuildError::Serialize(_))));
    }

    #[test]
    fn test_payload_debug_does_not_require_debug_value() {
        assert_eq!(format!("{:?}", Payload::Json(&Unserializable)), "Json(..)");
        assert_eq!(format!("{:?}", Payload::<()>::Absent), "Absent");
    }
}
