//! Request execution against a FHIR-style JSON API.
//!
//! [`HttpClient`] owns the transport, the base URL, any configured custom
//! headers, and an optional bearer token. Every verb helper funnels through
//! one internal request operation: merge headers, expand the URL, send,
//! classify by status, and either return the parsed JSON body or a
//! normalized [`ResponseError`](crate::error::ResponseError).

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;
use tracing::{instrument, Span};

use crate::error::{Error, ResponseError, Result};
use crate::headers::{self, HeaderSet};
use crate::logging;
use crate::method::HttpVerb;

/// Configuration for an [`HttpClient`].
///
/// ## Examples
///
/// ```rust
/// use fhir_api::{ClientConfig, HeaderSet};
///
/// let config = ClientConfig::new("https://fhir.example.com/api")
///     .with_custom_headers(HeaderSet::from([
///         ("X-Tenant".to_string(), "clinic-7".to_string()),
///     ]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    base_url: String,
    custom_headers: HeaderSet,
}

impl ClientConfig {
    /// Creates a configuration with the given base URL and no custom
    /// headers. The URL is not validated or contacted here.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            custom_headers: HeaderSet::new(),
        }
    }

    /// Sets headers sent with every request.
    ///
    /// Custom headers take precedence over the defaults and the auth
    /// header, but per-call headers still win over them.
    pub fn with_custom_headers(mut self, custom_headers: HeaderSet) -> Self {
        self.custom_headers = custom_headers;
        self
    }
}

/// Async HTTP client for a FHIR-style JSON API.
///
/// All calls resolve to the parsed JSON body (`serde_json::Value`) on a 2xx
/// status and fail with [`Error`] otherwise. The client applies no retries
/// and no timeout; callers own deadlines and recovery.
///
/// ## Examples
///
/// ```rust,no_run
/// use fhir_api::{ClientConfig, HttpClient};
///
/// # async fn example() -> fhir_api::Result<()> {
/// let client = HttpClient::new(ClientConfig::new("https://fhir.example.com"))?;
/// client.set_bearer_token("secret-token");
///
/// let patient = client.get("/Patient/123", None).await?;
/// println!("{}", patient["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
    /// Precomputed `Bearer <token>` value, present once a token is set.
    auth_header: RwLock<Option<String>>,
}

impl HttpClient {
    /// Creates a client from the given configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            config,
            auth_header: RwLock::new(None),
        })
    }

    /// Stores a bearer token used on every subsequent request.
    ///
    /// Write-only: there is no getter, and no expiry or refresh logic.
    /// Replacing the token takes effect from the next request whose headers
    /// are merged; last writer wins.
    pub fn set_bearer_token(&self, token: &str) {
        let header = format!("Bearer {token}");
        *self
            .auth_header
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(header);
    }

    /// Retrieves a resource.
    pub async fn get(&self, url: &str, headers: Option<&HeaderSet>) -> Result<Value> {
        self.request(HttpVerb::Get, url, headers, None).await
    }

    /// Deletes a resource.
    pub async fn delete(&self, url: &str, headers: Option<&HeaderSet>) -> Result<Value> {
        self.request(HttpVerb::Delete, url, headers, None).await
    }

    /// Creates a resource or triggers an action, sending `body` as JSON.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: Option<&HeaderSet>,
    ) -> Result<Value> {
        let payload = serde_json::to_vec(body)?;
        self.request(HttpVerb::Post, url, headers, Some(payload)).await
    }

    /// Replaces a resource, sending `body` as JSON.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: Option<&HeaderSet>,
    ) -> Result<Value> {
        let payload = serde_json::to_vec(body)?;
        self.request(HttpVerb::Put, url, headers, Some(payload)).await
    }

    /// Partially updates a resource, sending `body` as JSON.
    ///
    /// Headers are passed the same way as for [`post`](Self::post) and
    /// [`put`](Self::put).
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: Option<&HeaderSet>,
    ) -> Result<Value> {
        let payload = serde_json::to_vec(body)?;
        self.request(HttpVerb::Patch, url, headers, Some(payload)).await
    }

    /// The single request path every verb helper funnels through.
    #[instrument(
        name = "fhir_request",
        skip_all,
        fields(
            http.method = %verb,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn request(
        &self,
        verb: HttpVerb,
        url: &str,
        request_headers: Option<&HeaderSet>,
        payload: Option<Vec<u8>>,
    ) -> Result<Value> {
        let merged = self.merge_headers(request_headers);
        let full_url = self.expand_url(url);
        Span::current().record("http.url", full_url.as_str());
        logging::request_info(verb, &full_url, &merged);

        let header_map = headers::to_header_map(&merged)?;
        let mut request = self
            .client
            .request(verb.to_reqwest(), &full_url)
            .headers(header_map);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let raw = response.text().await?;
            let err =
                ResponseError::from_raw_body(status.as_u16(), raw, verb, full_url, merged);
            logging::response_info(err.response.status, &err.response.data);
            logging::request_error(&err);
            return Err(Error::Response(err));
        }

        let data: Value = response.json().await?;
        logging::response_info(status.as_u16(), &data);
        Ok(data)
    }

    /// Resolves a possibly-relative path against the base URL.
    ///
    /// A path already starting with `http` is treated as absolute and
    /// returned unchanged. Otherwise the junction carries exactly one `/`
    /// for any combination of trailing/leading slashes on the two sides.
    fn expand_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            return url.to_string();
        }
        let base = &self.config.base_url;
        match (base.ends_with('/'), url.starts_with('/')) {
            (true, true) => format!("{base}{}", &url[1..]),
            (false, false) => format!("{base}/{url}"),
            _ => format!("{base}{url}"),
        }
    }

    /// Merges header sources in increasing precedence: defaults, auth
    /// header (when a token is set), configured custom headers, per-call
    /// headers. Later sources overwrite earlier ones on key collision;
    /// keys match case-sensitively.
    fn merge_headers(&self, request_headers: Option<&HeaderSet>) -> HeaderSet {
        let mut merged = headers::default_headers();
        let auth = self
            .auth_header
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = auth.as_ref() {
            merged.insert("authorization".to_string(), value.clone());
        }
        drop(auth);
        merged.extend(
            self.config
                .custom_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        if let Some(request_headers) = request_headers {
            merged.extend(request_headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }
}
