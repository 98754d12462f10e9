//! Header sets and their conversion to wire headers.
//!
//! Headers are merged as plain string maps so that merge precedence uses
//! case-sensitive key matching; name-casing normalization only happens at
//! the wire boundary when a [`HeaderSet`] becomes a `reqwest` header map.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};

/// A mapping from header name to value.
///
/// Ordered so that log output and test assertions are deterministic.
pub type HeaderSet = BTreeMap<String, String>;

/// The `accept` value sent with every request unless overridden.
pub(crate) const DEFAULT_ACCEPT: &str = "application/json+fhir";

/// Headers applied to every request at the lowest merge precedence.
pub(crate) fn default_headers() -> HeaderSet {
    HeaderSet::from([("accept".to_string(), DEFAULT_ACCEPT.to_string())])
}

/// Converts a merged header set into a `reqwest` header map.
///
/// ## Errors
///
/// Returns [`Error::InvalidHeader`] if a header name or value cannot be
/// represented on the wire.
pub(crate) fn to_header_map(headers: &HeaderSet) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let wire_name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::InvalidHeader(format!("invalid header name `{name}`: {e}")))?;
        let wire_value = HeaderValue::try_from(value.as_str())
            .map_err(|e| Error::InvalidHeader(format!("invalid value for header `{name}`: {e}")))?;
        map.insert(wire_name, wire_value);
    }
    Ok(map)
}
