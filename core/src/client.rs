//! Async client for the users API.
//!
//! # Design
//! `ApiClient` pairs a `RequestMapper` with a `Transport`. `send` builds the
//! request, executes it exactly once, and classifies the response; there is
//! no retry and no shared mutable state, so concurrent calls on one client
//! (or clones of it) are independent.

use serde::de::DeserializeOwned;

use crate::endpoint::{Endpoint, UsersEndpoint};
use crate::error::Outcome;
use crate::mapper::RequestMapper;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::User;

/// Awaitable users API client.
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    mapper: RequestMapper,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Client for the public API over reqwest.
    pub fn new() -> Self {
        Self::with_transport(RequestMapper::new(), ReqwestTransport::new())
    }

    /// Client that sends every endpoint to `origin` instead of its own host.
    pub fn with_origin(origin: &str) -> Self {
        Self::with_transport(RequestMapper::with_origin(origin), ReqwestTransport::new())
    }
}

impl Default for ApiClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(mapper: RequestMapper, transport: T) -> Self {
        Self { mapper, transport }
    }

    pub fn mapper(&self) -> &RequestMapper {
        &self.mapper
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one call to `endpoint` and decode a 2xx body as `R`.
    pub async fn send<R, E>(&self, endpoint: &E) -> Outcome<R>
    where
        R: DeserializeOwned,
        E: Endpoint + ?Sized,
    {
        let outcome = self.round_trip(endpoint).await;
        if let Err(err) = &outcome {
            tracing::warn!(path = %endpoint.path(), error = %err, "request failed");
        }
        outcome
    }

    pub async fn list_users(&self) -> Outcome<Vec<User>> {
        self.send(&UsersEndpoint::ListAllUsers).await
    }

    pub async fn user_detail(&self, id: i64) -> Outcome<User> {
        self.send(&UsersEndpoint::UserDetail { id }).await
    }

    async fn round_trip<R, E>(&self, endpoint: &E) -> Outcome<R>
    where
        R: DeserializeOwned,
        E: Endpoint + ?Sized,
    {
        let request = self.mapper.build_request(endpoint)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");

        self.mapper.parse_response(response)
    }
}
