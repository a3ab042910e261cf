use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub phone: String,
    pub website: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
}

pub type Db = Arc<BTreeMap<i64, User>>;

/// A truncated JSON object served with a JSON content type.
pub const MALFORMED_BODY: &str = r#"{"id": 1, "name": "#;

fn user(id: i64, name: &str, username: &str, email: &str, phone: &str, website: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        address: None,
        phone: phone.to_string(),
        website: website.to_string(),
    }
}

/// The users every `app()` starts with.
pub fn seed() -> Vec<User> {
    let mut leanne = user(
        1,
        "Leanne Graham",
        "Bret",
        "Sincere@april.biz",
        "1-770-736-8031 x56442",
        "hildegard.org",
    );
    leanne.address = Some(Address {
        street: Some("Kulas Light".to_string()),
        suite: Some("Apt. 556".to_string()),
        city: Some("Gwenborough".to_string()),
        zipcode: Some("92998-3874".to_string()),
    });
    let mut ervin = user(
        2,
        "Ervin Howell",
        "Antonette",
        "Shanna@melissa.tv",
        "010-692-6593 x09125",
        "anastasia.net",
    );
    ervin.address = Some(Address {
        city: Some("Wisokyburgh".to_string()),
        ..Address::default()
    });
    let clementine = user(
        3,
        "Clementine Bauch",
        "Samantha",
        "Nathan@yesenia.net",
        "1-463-123-4447",
        "ramiro.info",
    );
    vec![leanne, ervin, clementine]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(users: Vec<User>) -> Router {
    let db: Db = Arc::new(users.into_iter().map(|u| (u.id, u)).collect());
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/private/users", get(list_private_users))
        .route("/echo", post(echo))
        .route("/status/{code}", get(status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.values().cloned().collect())
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<User>, StatusCode> {
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_private_users(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, StatusCode> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if !authorized {
        tracing::debug!("rejecting request without bearer token");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(db.values().cloned().collect()))
}

async fn echo(Json(fields): Json<BTreeMap<String, String>>) -> Json<BTreeMap<String, String>> {
    Json(fields)
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn malformed() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], MALFORMED_BODY)
}
