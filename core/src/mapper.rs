//! Stateless request builder and response classifier.
//!
//! # Design
//! `RequestMapper` holds at most an origin override and carries no mutable
//! state between calls. `build_request` turns an `Endpoint` into an
//! `HttpRequest`; `parse_response` turns an `HttpResponse` into an
//! `Outcome`. Neither touches the network, so both halves are deterministic
//! and can be driven by any executor.

use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{Outcome, RequestError};
use crate::http::{HttpRequest, HttpResponse};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds `HttpRequest` values from endpoints and classifies responses.
#[derive(Debug, Clone, Default)]
pub struct RequestMapper {
    origin: Option<String>,
}

impl RequestMapper {
    /// A mapper that sends every endpoint to its own scheme and host.
    pub fn new() -> Self {
        Self { origin: None }
    }

    /// A mapper that replaces each endpoint's scheme and host with `origin`
    /// (e.g. `http://127.0.0.1:3000`), keeping the endpoint's path.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: Some(origin.trim_end_matches('/').to_string()),
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn build_request<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<HttpRequest, RequestError> {
        let url = self.compose_url(endpoint)?;

        let mut headers: Vec<(String, String)> = endpoint.headers().unwrap_or_default().into_iter().collect();

        let body = match endpoint.body() {
            Some(fields) => {
                let encoded =
                    serde_json::to_string(&fields).map_err(|e| RequestError::Serialization(e.to_string()))?;
                if !headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("content-type")) {
                    headers.push(("content-type".to_string(), JSON_CONTENT_TYPE.to_string()));
                }
                Some(encoded)
            }
            None => None,
        };

        Ok(HttpRequest {
            method: endpoint.method(),
            url: url.into(),
            headers,
            body,
        })
    }

    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Outcome<T> {
        match response.status {
            200..=299 => {
                serde_json::from_slice(&response.body).map_err(|e| RequestError::Decode(e.to_string()))
            }
            401 => Err(RequestError::Unauthorized),
            status => Err(RequestError::UnexpectedStatusCode {
                status,
                body: response.body_text(),
            }),
        }
    }

    /// Scheme and host (or the origin) are parsed on their own; the path is
    /// then set as a path, so `?` and `#` inside it are percent-encoded.
    fn compose_url<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Url, RequestError> {
        let path = endpoint.path();
        if !path.is_empty() && !path.starts_with('/') {
            return Err(RequestError::InvalidUrl(format!("path must start with '/': {path:?}")));
        }
        if path.contains('\\') || path.split('/').any(is_dot_segment) {
            return Err(RequestError::InvalidUrl(format!("path must not contain dot segments: {path:?}")));
        }

        let mut url = match &self.origin {
            Some(origin) => {
                let url = Url::parse(origin).map_err(|e| RequestError::InvalidUrl(format!("{origin}: {e}")))?;
                if url.query().is_some() || url.fragment().is_some() {
                    return Err(RequestError::InvalidUrl(format!(
                        "origin must not carry a query or fragment: {origin}"
                    )));
                }
                url
            }
            None => {
                let scheme = endpoint.scheme();
                let host = endpoint.host();
                if scheme.is_empty() {
                    return Err(RequestError::InvalidUrl("empty scheme".to_string()));
                }
                if host.is_empty() {
                    return Err(RequestError::InvalidUrl("empty host".to_string()));
                }
                if host.contains(|c: char| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '@')) {
                    return Err(RequestError::InvalidUrl(format!("malformed host: {host:?}")));
                }
                let raw = format!("{scheme}://{host}");
                Url::parse(&raw).map_err(|e| RequestError::InvalidUrl(format!("{raw}: {e}")))?
            }
        };

        if !url.has_host() || url.cannot_be_a_base() {
            return Err(RequestError::InvalidUrl(format!("{url}: missing host")));
        }

        let full_path = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&full_path);
        Ok(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
