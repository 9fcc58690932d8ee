//
//  cloudfoundry-client
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cloudfoundry_client::api::common::{Error, TransportError};
use cloudfoundry_client::api::CloudFoundryClient;
use cloudfoundry_client::auth::Credential;

/// Token every test client sends.
pub const TOKEN: &str = "test-access-token";

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a text fixture.
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", name, e))
}

/// Parsed JSON fixture, for matching request bodies.
pub fn json_fixture(name: &str) -> serde_json::Value {
    serde_json::from_str(&fixture(name)).unwrap()
}

/// The Cloud Foundry error envelope served by error mocks.
pub fn error_body() -> String {
    fixture("error_response.json")
}

/// A bearer-authenticated client pointed at `server`.
pub fn client(server: &mockito::Server) -> CloudFoundryClient {
    CloudFoundryClient::new(&server.url())
        .unwrap()
        .with_auth(Credential::bearer(TOKEN))
}

/// The `Authorization` header value [`client`] sends.
pub fn auth_header() -> String {
    format!("Bearer {}", TOKEN)
}

/// Asserts `error` is the platform error from [`error_body`].
pub fn assert_platform_error(error: Error) {
    match error {
        Error::Platform(platform) => {
            assert_eq!(platform.status, 400);
            assert_eq!(platform.code, "10001");
            assert_eq!(platform.error_code.as_deref(), Some("CF-MessageParseError"));
            assert_eq!(
                platform.description,
                "Request invalid due to parse error: invalid request"
            );
        }
        other => panic!("expected platform error, got {:?}", other),
    }
}

/// Asserts `error` is an invalid request naming exactly `fields`.
pub fn assert_invalid_request(error: Error, fields: &[&str]) {
    match error {
        Error::InvalidRequest(errors) => {
            let actual: Vec<&str> = errors.violations().iter().map(|v| v.field).collect();
            assert_eq!(actual, fields);
        }
        other => panic!("expected invalid request, got {:?}", other),
    }
}

/// Serves `response` verbatim to a single connection, then hangs up.
///
/// For responses mockito cannot produce, such as a body shorter than its
/// `Content-Length`. Returns the server's base URL.
pub async fn serve_raw(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

/// Asserts `error` is an HTTP transport failure.
pub fn assert_http_transport_error(error: Error) {
    match error {
        Error::Transport(TransportError::Http(_)) => {}
        other => panic!("expected transport error, got {:?}", other),
    }
}
