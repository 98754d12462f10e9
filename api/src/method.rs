//! HTTP verbs issued by the client.

use strum::{Display, EnumString};

/// The HTTP verbs this client can issue.
///
/// Verbs render in lowercase, which is the form carried in the request
/// context of a [`ResponseError`](crate::error::ResponseError).
///
/// ## Examples
///
/// ```rust
/// use fhir_api::HttpVerb;
///
/// let verb = HttpVerb::Get;
/// assert_eq!(verb.to_string(), "get");
/// assert!(!verb.has_body());
///
/// let parsed: HttpVerb = "patch".parse().unwrap();
/// assert_eq!(parsed, HttpVerb::Patch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HttpVerb {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl HttpVerb {
    /// Returns `true` if this verb carries a request body.
    ///
    /// POST, PUT, and PATCH do; GET and DELETE do not.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<HttpVerb> for reqwest::Method {
    fn from(verb: HttpVerb) -> Self {
        verb.to_reqwest()
    }
}
