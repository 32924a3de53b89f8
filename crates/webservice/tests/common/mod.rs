//! Common test utilities and helpers

use webservice::WebService;
use wiremock::MockServer;

/// The content type that triggers JSON decoding
#[allow(dead_code)]
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Create a service pointing at a mock server
#[allow(dead_code)]
pub fn service_for(mock_server: &MockServer) -> WebService {
    WebService::new(mock_server.uri()).expect("Failed to build service")
}

/// A base URI on localhost whose port is known to be closed
#[allow(dead_code)]
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
