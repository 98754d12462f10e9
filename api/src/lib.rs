//! HTTP request helpers for a FHIR-style JSON API.
//!
//! This crate is the request layer of a larger API client. It resolves
//! relative paths against a base URL, merges header sources with defined
//! precedence (defaults, bearer auth, configured custom headers, per-call
//! headers), performs the call, and parses JSON bodies. Any non-2xx status
//! becomes a single normalized error shape carrying the status, the decoded
//! body, and the request context.
//!
//! Retries, caching, timeouts, and FHIR resource semantics are all left to
//! the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fhir_api::{ClientConfig, HttpClient};
//!
//! # async fn example() -> fhir_api::Result<()> {
//! let client = HttpClient::new(ClientConfig::new("https://fhir.example.com/api"))?;
//! client.set_bearer_token("secret-token");
//!
//! let patient = client.get("/Patient/123", None).await?;
//! println!("{patient}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod headers;
mod logging;
pub mod method;

pub use client::{ClientConfig, HttpClient};
pub use error::{Error, ErrorResponse, RequestContext, ResponseError, Result};
pub use headers::HeaderSet;
pub use method::HttpVerb;
