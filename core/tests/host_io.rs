//! Drive `RequestMapper` with a blocking executor.
//!
//! # Design
//! Starts the mock server on a random port, then runs every request built by
//! the mapper through ureq instead of the crate's own transport. Confirms the
//! build and parse halves stand on their own without the async client.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use users_core::{
    Endpoint, HttpMethod, HttpRequest, HttpResponse, RequestError, RequestMapper, User, UsersEndpoint,
};

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data, leaving classification to the mapper.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let url = req.url.as_str();
    let headers = req.headers.as_slice();
    let body = req.body.as_deref().unwrap_or("").as_bytes();
    let mut response = match req.method {
        HttpMethod::Get => with_headers(agent.get(url), headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(url), headers).call(),
        HttpMethod::Post => with_headers(agent.post(url), headers).send(body),
        HttpMethod::Put => with_headers(agent.put(url), headers).send(body),
        HttpMethod::Patch => with_headers(agent.patch(url), headers).send(body),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_vec().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

struct CreateUser(BTreeMap<String, String>);

impl Endpoint for CreateUser {
    fn path(&self) -> String {
        "/echo".to_string()
    }
    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }
    fn body(&self) -> Option<BTreeMap<String, String>> {
        Some(self.0.clone())
    }
}

struct PrivateUsers;

impl Endpoint for PrivateUsers {
    fn path(&self) -> String {
        "/private/users".to_string()
    }
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }
}

#[test]
fn users_walkthrough() {
    let addr = start_server();
    let mapper = RequestMapper::with_origin(&format!("http://{addr}"));

    // Step 1: list all users.
    let req = mapper.build_request(&UsersEndpoint::ListAllUsers).unwrap();
    assert_eq!(req.url, format!("http://{addr}/users"));
    let users: Vec<User> = mapper.parse_response(execute(req)).unwrap();
    assert_eq!(users.len(), 3);

    // Step 2: fetch each one by id.
    for listed in &users {
        let req = mapper.build_request(&UsersEndpoint::UserDetail { id: listed.id }).unwrap();
        let fetched: User = mapper.parse_response(execute(req)).unwrap();
        assert_eq!(&fetched, listed);
    }

    // Step 3: unknown id.
    let req = mapper.build_request(&UsersEndpoint::UserDetail { id: 77 }).unwrap();
    let err = mapper.parse_response::<User>(execute(req)).unwrap_err();
    assert!(matches!(err, RequestError::UnexpectedStatusCode { status: 404, .. }));

    // Step 4: JSON body round-trips through the echo route.
    let fields = BTreeMap::from([("name".to_string(), "Nicholas Runolfsdottir V".to_string())]);
    let req = mapper.build_request(&CreateUser(fields.clone())).unwrap();
    assert_eq!(req.header("content-type"), Some("application/json"));
    let echoed: BTreeMap<String, String> = mapper.parse_response(execute(req)).unwrap();
    assert_eq!(echoed, fields);

    // Step 5: protected route without credentials.
    let req = mapper.build_request(&PrivateUsers).unwrap();
    let err = mapper.parse_response::<Vec<User>>(execute(req)).unwrap_err();
    assert_eq!(err, RequestError::Unauthorized);
}
