//! The user resource served by the API.
//!
//! Only what the list and detail screens read is modelled. Fields the public
//! API returns but nothing here reads (`company`, `address.geo`) are ignored
//! on decode.

use serde::{Deserialize, Serialize};

/// A user returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<Address>,
    pub phone: String,
    pub website: String,
}

/// Postal address attached to a user. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}
