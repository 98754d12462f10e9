//! Error types for the API client.
//!
//! Every non-2xx response is normalized into a [`ResponseError`] carrying
//! the status, the best-effort decoded body, and the request context it
//! came from. Transport failures (DNS, connection, body drains) stay a
//! distinct [`Error::Transport`] variant so callers can tell a network
//! problem from an HTTP-status failure.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::headers::HeaderSet;
use crate::method::HttpVerb;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the API client.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Response(ResponseError),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The outbound body could not be serialized to JSON.
    #[error("body serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A merged header name or value cannot be sent on the wire.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// The normalized shape of a failed HTTP response.
///
/// ## Examples
///
/// ```rust,no_run
/// use fhir_api::{ClientConfig, Error, HttpClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new(ClientConfig::new("https://fhir.example.com"))?;
/// match client.get("/Patient/99", None).await {
///     Ok(patient) => println!("{patient}"),
///     Err(Error::Response(err)) if err.response.status == 404 => {
///         println!("no such patient: {}", err.response.data);
///     }
///     Err(other) => return Err(other.into()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResponseError {
    /// What the server sent back.
    pub response: ErrorResponse,
    /// The request that provoked it.
    pub config: RequestContext,
}

/// Status and decoded body of a failed response.
#[derive(Debug)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status: u16,
    /// The JSON-decoded body, or `Value::String` with the raw text when the
    /// body is not valid JSON.
    pub data: Value,
}

/// The request that produced a [`ResponseError`].
#[derive(Debug)]
pub struct RequestContext {
    /// Verb the request was issued with.
    pub method: HttpVerb,
    /// Fully expanded URL.
    pub url: String,
    /// The merged headers that were sent.
    pub headers: HeaderSet,
}

impl ResponseError {
    /// Builds a normalized error from a drained response body.
    ///
    /// The raw text is JSON-parsed on a best-effort basis; bodies that are
    /// not valid JSON are kept verbatim as a string value.
    pub(crate) fn from_raw_body(
        status: u16,
        raw_body: String,
        method: HttpVerb,
        url: String,
        headers: HeaderSet,
    ) -> Self {
        let data = serde_json::from_str(&raw_body).unwrap_or_else(|_| Value::String(raw_body));
        Self {
            response: ErrorResponse { status, data },
            config: RequestContext { method, url, headers },
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} returned status {}",
            self.config.method, self.config.url, self.response.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_body_parses_json() {
        let err = ResponseError::from_raw_body(
            404,
            r#"{"error":"not found"}"#.to_string(),
            HttpVerb::Get,
            "https://fhir.example.com/Patient/99".to_string(),
            HeaderSet::new(),
        );
        assert_eq!(err.response.status, 404);
        assert_eq!(err.response.data, json!({"error": "not found"}));
    }

    #[test]
    fn test_from_raw_body_keeps_raw_text() {
        let err = ResponseError::from_raw_body(
            500,
            "Internal Server Error".to_string(),
            HttpVerb::Delete,
            "https://fhir.example.com/Patient/99".to_string(),
            HeaderSet::new(),
        );
        assert_eq!(err.response.data, Value::String("Internal Server Error".to_string()));
    }

    #[test]
    fn test_display() {
        let err = ResponseError::from_raw_body(
            422,
            "{}".to_string(),
            HttpVerb::Post,
            "https://fhir.example.com/Patient".to_string(),
            HeaderSet::new(),
        );
        assert_eq!(
            err.to_string(),
            "post https://fhir.example.com/Patient returned status 422"
        );
    }
}
