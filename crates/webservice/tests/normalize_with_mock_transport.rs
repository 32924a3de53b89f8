//! Normalization tests against a mocked transport
//!
//! The transport is replaced with a mockall double so each test controls
//! the exact headers and body the normalizer sees.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mockall::mock;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use webservice::{
    HttpRequest, HttpResponse, Method, NormalizedResponse, RequestOptions, ResponseBody,
    TransportError, WebService,
};

const JSON_UTF8: &str = "application/json; charset=utf-8";

mock! {
    pub Wire {}

    #[async_trait]
    impl webservice::Transport for Wire {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

fn header(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

fn responding(response: HttpResponse) -> MockWire {
    let mut wire = MockWire::new();
    wire.expect_send()
        .times(1)
        .returning(move |_| Ok(response.clone()));
    wire
}

#[tokio::test]
async fn test_json_user_scenario() {
    let mut wire = MockWire::new();
    wire.expect_send()
        .withf(|req| {
            req.method == Method::GET
                && req.uri == "/users/1"
                && req.options == RequestOptions::default()
        })
        .times(1)
        .returning(|_| {
            Ok(HttpResponse::new(
                200,
                vec![header("content-type", JSON_UTF8)],
                br#"{"id":1}"#.to_vec(),
            ))
        });

    let service = WebService::with_transport(wire);
    let result = service.get("/users/1", RequestOptions::new()).await;

    assert_eq!(
        result,
        NormalizedResponse {
            body: ResponseBody::Json(json!({"id": 1})),
            status_code: 200,
            headers: BTreeMap::from([("Content-Type".to_string(), JSON_UTF8.to_string())]),
        }
    );
}

#[rstest]
#[case("text/plain")]
#[case("application/json")]
#[case("application/json; charset=UTF-8")]
#[case("application/problem+json; charset=utf-8")]
#[tokio::test]
async fn test_other_content_types_keep_raw_text(#[case] content_type: &str) {
    let raw = r#"{"id":1}"#;
    let service = WebService::with_transport(responding(HttpResponse::new(
        200,
        vec![header("content-type", content_type)],
        raw.as_bytes().to_vec(),
    )));

    let result = service.get("/users/1", RequestOptions::new()).await;

    assert_eq!(result.body, ResponseBody::Text(raw.to_string()));
}

#[tokio::test]
async fn test_missing_content_type_keeps_raw_text() {
    let service = WebService::with_transport(responding(HttpResponse::new(
        200,
        Vec::new(),
        b"hello".to_vec(),
    )));

    let result = service.get("/", RequestOptions::new()).await;

    assert_eq!(result.body, ResponseBody::Text("hello".to_string()));
    assert!(result.headers.is_empty());
}

#[tokio::test]
async fn test_multi_valued_headers_are_joined() {
    let service = WebService::with_transport(responding(HttpResponse::new(
        200,
        vec![
            header("vary", "Accept"),
            header("set-cookie", "a=1"),
            header("vary", "Accept-Encoding"),
            header("set-cookie", "b=2"),
        ],
        Vec::new(),
    )));

    let result = service.get("/", RequestOptions::new()).await;

    assert_eq!(result.headers["Vary"], "Accept, Accept-Encoding");
    assert_eq!(result.headers["Set-Cookie"], "a=1, b=2");
}

#[tokio::test]
async fn test_http_error_is_normalized_not_synthesized() {
    let service = WebService::with_transport(responding(HttpResponse::new(
        404,
        vec![header("content-type", JSON_UTF8)],
        br#"{"error":"not found"}"#.to_vec(),
    )));

    let result = service.get("/users/99", RequestOptions::new()).await;

    assert_eq!(result.status_code, 404);
    assert_eq!(result.body, ResponseBody::Json(json!({"error": "not found"})));
}

#[rstest]
#[case(TransportError::Connection("error sending request: dns error".to_string()))]
#[case(TransportError::Timeout("operation timed out".to_string()))]
#[case(TransportError::InvalidUri("relative URL without a base".to_string()))]
#[tokio::test]
async fn test_transport_failure_is_504(#[case] error: TransportError) {
    let message = error.to_string();
    let mut wire = MockWire::new();
    wire.expect_send()
        .times(1)
        .returning(move |_| Err(error.clone()));

    let service = WebService::with_transport(wire);
    let result = service.post("/orders", RequestOptions::new()).await;

    assert_eq!(
        result,
        NormalizedResponse {
            body: ResponseBody::Text(message),
            status_code: 504,
            headers: BTreeMap::new(),
        }
    );
}

#[tokio::test]
async fn test_malformed_json_falls_back_to_text() {
    let service = WebService::with_transport(responding(HttpResponse::new(
        200,
        vec![header("content-type", JSON_UTF8)],
        b"{\"id\":".to_vec(),
    )));

    let result = service.get("/users/1", RequestOptions::new()).await;

    assert_eq!(result.status_code, 200);
    assert_eq!(result.body, ResponseBody::Text("{\"id\":".to_string()));
}

#[rstest]
#[case(Method::GET)]
#[case(Method::POST)]
#[case(Method::PUT)]
#[case(Method::PATCH)]
#[case(Method::DELETE)]
#[case(Method::HEAD)]
#[tokio::test]
async fn test_convenience_methods_delegate(#[case] verb: Method) {
    let expected = verb.clone();
    let mut wire = MockWire::new();
    wire.expect_send()
        .withf(move |req| req.method == expected && req.uri == "/things")
        .times(1)
        .returning(|_| Ok(HttpResponse::new(204, Vec::new(), Vec::new())));

    let service = WebService::with_transport(wire);
    let options = RequestOptions::new();
    let result = match verb {
        Method::GET => service.get("/things", options).await,
        Method::POST => service.post("/things", options).await,
        Method::PUT => service.put("/things", options).await,
        Method::PATCH => service.patch("/things", options).await,
        Method::DELETE => service.delete("/things", options).await,
        Method::HEAD => service.head("/things", options).await,
        other => service.request(other, "/things", options).await,
    };

    assert_eq!(result.status_code, 204);
}

#[tokio::test]
async fn test_options_reach_transport_unchanged() {
    let options = RequestOptions::new()
        .with_query("page", "3")
        .with_header("X-Trace", "t-1")
        .with_basic_auth("ada", "secret")
        .with_json(json!({"name": "ada"}));
    let expected = options.clone();

    let mut wire = MockWire::new();
    wire.expect_send()
        .withf(move |req| req.options == expected)
        .times(1)
        .returning(|_| Ok(HttpResponse::new(201, Vec::new(), Vec::new())));

    let service = WebService::with_transport(wire);
    let result = service.request(Method::POST, "/users", options).await;

    assert_eq!(result.status_code, 201);
}
