//! Request mapper and async client for the users API.
//!
//! # Overview
//! Turns endpoint descriptors into HTTP requests, executes each request
//! once, and classifies the response by status code into a typed
//! `Outcome`: the decoded value, or a `RequestError` saying why not.
//!
//! # Design
//! - `RequestMapper` is stateless. `build_request` (endpoint → request) and
//!   `parse_response` (response → outcome) never touch the network, so any
//!   executor can sit between them.
//! - `Transport` is the only I/O seam; `ReqwestTransport` is the default.
//! - `ApiClient` composes the three steps into one awaitable `send` and is
//!   an ordinary value: no global singleton, cheap to clone.
//! - `User` has no compile-time link to the mock server's model. The two
//!   only meet as JSON in `tests/integration.rs`, which compares them.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod mapper;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use endpoint::{Endpoint, UsersEndpoint, DEFAULT_HOST, DEFAULT_SCHEME};
pub use error::{Outcome, RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mapper::RequestMapper;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Address, User};
