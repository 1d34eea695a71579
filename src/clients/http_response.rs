//! Response-side types for the Heroku API client.
//!
//! This module provides the [`Sink`] type describing where a response body
//! goes, and [`decode`], which classifies the status and delivers the body.

use std::fmt;

use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::clients::errors::{DecodeError, HttpError, HttpStatusError};

/// Response header carrying the API's request identifier.
pub const REQUEST_ID_HEADER: &str = "Request-Id";

/// Destination for a successful response body.
///
/// # Example
///
/// ```rust
/// use heroku_api::clients::Sink;
///
/// let mut raw: Vec<u8> = Vec::new();
/// let mut names: Vec<String> = Vec::new();
///
/// let discard = Sink::<()>::Discard;
/// let bytes = Sink::<()>::Raw(&mut raw);
/// let structured = Sink::Json(&mut names);
/// # let _ = (discard, bytes, structured);
/// ```
pub enum Sink<'a, T = ()> {
    /// The body is drained and dropped.
    Discard,
    /// The body is copied verbatim into the writer.
    Raw(&'a mut (dyn AsyncWrite + Unpin + Send)),
    /// The body is parsed as JSON and replaces the target value.
    Json(&'a mut T),
}

impl<T> fmt::Debug for Sink<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard => f.write_str("Discard"),
            Self::Raw(_) => f.write_str("Raw(..)"),
            Self::Json(_) => f.write_str("Json(..)"),
        }
    }
}

/// Classifies a response and delivers its body into `sink`.
///
/// Any status outside 200..=299 yields [`HttpError::Status`] and the body is
/// kept as text on the error instead of being decoded. A JSON target is only
/// replaced once the whole body has parsed successfully.
///
/// The response is consumed, so its connection is released on every path.
///
/// # Errors
///
/// Returns [`HttpError::Status`] for non-2xx responses and
/// [`HttpError::Decode`] when the body cannot be read, written or parsed.
pub async fn decode<T: DeserializeOwned>(
    mut response: reqwest::Response,
    sink: Sink<'_, T>,
) -> Result<(), HttpError> {
    let status = response.status();
    if !status.is_success() {
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let message = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Failed to read error response body: {}", e);
                String::new()
            }
        };

        tracing::debug!(
            "Heroku API responded with {} (request id: {:?})",
            status,
            request_id
        );

        return Err(HttpStatusError {
            code: status.as_u16(),
            status: status.to_string(),
            message,
            request_id,
        }
        .into());
    }

    match sink {
        Sink::Discard => {
            loop {
                match response.chunk().await {
                    Ok(Some(_)) => {}
                    Ok(None) => break,
                    Err(e) => {
                        tracing::debug!("Failed to drain discarded response body: {}", e);
                        break;
                    }
                }
            }
        }
        Sink::Raw(writer) => {
            while let Some(chunk) = response.chunk().await.map_err(DecodeError::Body)? {
                writer.write_all(&chunk).await.map_err(DecodeError::Write)?;
            }
            writer.flush().await.map_err(DecodeError::Write)?;
        }
        Sink::Json(target) => {
            let bytes = response.bytes().await.map_err(DecodeError::Body)?;
            *target = serde_json::from_slice(&bytes).map_err(DecodeError::Json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(code: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            http::Response::builder()
                .status(code)
                .header(REQUEST_ID_HEADER, "req-42")
                .body(body)
                .unwrap(),
        )
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn test_json_sink_replaces_target() {
        let mut target = Named::default();
        decode(response(200, r#"{"name":"myapp"}"#), Sink::Json(&mut target))
            .await
            .unwrap();
        assert_eq!(target.name, "myapp");
    }

    #[tokio::test]
    async fn test_raw_sink_receives_exact_bytes() {
        let mut buffer: Vec<u8> = Vec::new();
        decode(response(200, "not json at all"), Sink::<()>::Raw(&mut buffer))
            .await
            .unwrap();
        assert_eq!(buffer, b"not json at all");
    }

    #[tokio::test]
    async fn test_discard_ignores_body() {
        decode(response(204, "ignored"), Sink::<()>::Discard)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_every_2xx_status_is_success() {
        for code in [200, 201, 202, 204, 206, 299] {
            assert!(
                decode(response(code, ""), Sink::<()>::Discard).await.is_ok(),
                "expected {code} to be a success"
            );
        }
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error_without_decoding() {
        let mut target = Named {
            name: "untouched".to_string(),
        };
        let error = decode(response(404, "<html>nope</html>"), Sink::Json(&mut target))
            .await
            .unwrap_err();

        match error {
            HttpError::Status(e) => {
                assert_eq!(e.code, 404);
                assert_eq!(e.status, "404 Not Found");
                assert_eq!(e.message, "<html>nope</html>");
                assert_eq!(e.request_id.as_deref(), Some("req-42"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(target.name, "untouched");
    }

    #[tokio::test]
    async fn test_redirect_and_informational_ranges_are_errors() {
        for code in [199, 300, 301, 500, 503] {
            let result = decode(response(code, ""), Sink::<()>::Discard).await;
            assert!(
                matches!(result, Err(HttpError::Status(_))),
                "expected {code} to be a status error"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error_and_target_is_kept() {
        let mut target = Named {
            name: "before".to_string(),
        };
        let result = decode(response(200, r#"{"name": 5}"#), Sink::Json(&mut target)).await;

        assert!(matches!(result, Err(HttpError::Decode(DecodeError::Json(_)))));
        assert_eq!(target.name, "before");
    }

    #[tokio::test]
    async fn test_empty_body_into_json_sink_is_decode_error() {
        let mut target = Named::default();
        let result = decode(response(200, ""), Sink::Json(&mut target)).await;
        assert!(matches!(result, Err(HttpError::Decode(DecodeError::Json(_)))));
    }

    struct FullDisk;

    impl AsyncWrite for FullDisk {
        fn poll_write(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
            _: &[u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::task::Poll::Ready(Err(std::io::Error::other("disk full")))
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn poll_shutdown(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_raw_sink_write_failure_is_decode_error() {
        let mut disk = FullDisk;
        let result = decode(response(200, "abc"), Sink::<()>::Raw(&mut disk)).await;

        match result {
            Err(HttpError::Decode(DecodeError::Write(e))) => {
                assert_eq!(e.to_string(), "disk full");
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_error_on_raw_sink_writes_nothing() {
        let mut buffer: Vec<u8> = Vec::new();
        let result = decode(response(500, "boom"), Sink::<()>::Raw(&mut buffer)).await;

        assert!(matches!(result, Err(HttpError::Status(e)) if e.message == "boom"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_sink_debug() {
        let mut buffer: Vec<u8> = Vec::new();
        assert_eq!(format!("{:?}", Sink::<()>::Discard), "Discard");
        assert_eq!(format!("{:?}", Sink::<()>::Raw(&mut buffer)), "Raw(..)");
    }
}
