//! Structured log events for outbound requests.
//!
//! `tracing` events never fail, so emitting them cannot alter the outcome
//! of the request they describe.

use serde_json::Value;
use tracing::{debug, error};

use crate::error::ResponseError;
use crate::headers::HeaderSet;
use crate::method::HttpVerb;

/// Logs the request about to go out on the wire.
pub(crate) fn request_info(verb: HttpVerb, url: &str, headers: &HeaderSet) {
    debug!(
        http.method = %verb,
        http.url = url,
        http.headers = ?headers,
        "outbound request"
    );
}

/// Logs the final status and decoded body of a response.
pub(crate) fn response_info(status: u16, data: &Value) {
    debug!(http.status_code = status, http.body = %data, "response received");
}

/// Logs a normalized response error.
pub(crate) fn request_error(err: &ResponseError) {
    error!(
        http.method = %err.config.method,
        http.url = %err.config.url,
        http.status_code = err.response.status,
        "request failed: {err}"
    );
}
