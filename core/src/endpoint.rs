//! Endpoint descriptors.
//!
//! An `Endpoint` describes one logical HTTP call: where it goes, which verb
//! it uses, and what it carries. Implementations are immutable values; the
//! `RequestMapper` turns them into `HttpRequest`s.

use std::collections::BTreeMap;

use crate::http::HttpMethod;

/// Scheme used when an endpoint does not override it.
pub const DEFAULT_SCHEME: &str = "https";

/// Host of the public users API.
pub const DEFAULT_HOST: &str = "jsonplaceholder.typicode.com";

/// Description of a single HTTP call.
///
/// Only `path` and `method` are required. Mappings are ordered so that the
/// built request is deterministic.
pub trait Endpoint {
    fn scheme(&self) -> &str {
        DEFAULT_SCHEME
    }

    fn host(&self) -> &str {
        DEFAULT_HOST
    }

    fn path(&self) -> String;

    fn method(&self) -> HttpMethod;

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        None
    }

    /// Serialized as a JSON object when present.
    fn body(&self) -> Option<BTreeMap<String, String>> {
        None
    }
}

/// The calls the users API supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersEndpoint {
    ListAllUsers,
    UserDetail { id: i64 },
}

impl Endpoint for UsersEndpoint {
    fn path(&self) -> String {
        match self {
            UsersEndpoint::ListAllUsers => "/users".to_string(),
            UsersEndpoint::UserDetail { id } => format!("/users/{id}"),
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            UsersEndpoint::ListAllUsers | UsersEndpoint::UserDetail { .. } => HttpMethod::Get,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_users_targets_collection() {
        let endpoint = UsersEndpoint::ListAllUsers;
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host(), "jsonplaceholder.typicode.com");
        assert_eq!(endpoint.path(), "/users");
        assert_eq!(endpoint.method(), HttpMethod::Get);
        assert!(endpoint.headers().is_none());
        assert!(endpoint.body().is_none());
    }

    #[test]
    fn user_detail_embeds_id_in_path() {
        let endpoint = UsersEndpoint::UserDetail { id: 7 };
        assert_eq!(endpoint.path(), "/users/7");
        assert_eq!(endpoint.method(), HttpMethod::Get);
        assert!(endpoint.body().is_none());
    }
}
