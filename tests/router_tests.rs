//! In-process tests of the full router, driven with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use exemplo::config::{CACHE_CONTROL_EXAMPLE, CACHE_CONTROL_HEALTH};
use exemplo::create_router;

const EXAMPLE_BODY: &str = r#"{"mensagem":"É um JSON de exemplo..."}"#;
const HEALTH_BODY: &str = r#"{"status":"healthy"}"#;

async fn send(method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    create_router().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_str<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn get_root_returns_example_message() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, header::CONTENT_TYPE.as_str()),
        Some("application/json")
    );
    assert_eq!(body_string(response).await, EXAMPLE_BODY);
}

#[tokio::test]
async fn get_health_returns_healthy() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, header::CONTENT_TYPE.as_str()),
        Some("application/json")
    );
    assert_eq!(body_string(response).await, HEALTH_BODY);
}

#[tokio::test]
async fn body_parses_as_expected_json() {
    let response = send(Method::GET, "/").await;
    let value: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(value, serde_json::json!({"mensagem": "É um JSON de exemplo..."}));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    for uri in ["/", "/health"] {
        let first = body_string(send(Method::GET, uri).await).await;
        let second = body_string(send(Method::GET, uri).await).await;
        assert_eq!(first, second, "body changed between requests to {uri}");
    }
}

#[tokio::test]
async fn post_root_is_method_not_allowed() {
    let response = send(Method::POST, "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let allow = header_str(&response, header::ALLOW.as_str()).unwrap_or_default();
    assert!(allow.contains("GET"), "unexpected Allow header: {allow:?}");
}

#[tokio::test]
async fn delete_health_is_method_not_allowed() {
    let response = send(Method::DELETE, "/health").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = send(Method::GET, "/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn head_returns_headers_without_body() {
    for (uri, cache_control) in [
        ("/", CACHE_CONTROL_EXAMPLE),
        ("/health", CACHE_CONTROL_HEALTH),
    ] {
        let response = send(Method::HEAD, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::CONTENT_TYPE.as_str()),
            Some("application/json")
        );
        assert_eq!(
            header_str(&response, header::CACHE_CONTROL.as_str()),
            Some(cache_control)
        );
        assert!(body_string(response).await.is_empty());
    }
}

#[tokio::test]
async fn cache_control_is_set_per_route() {
    let example = send(Method::GET, "/").await;
    assert_eq!(
        header_str(&example, header::CACHE_CONTROL.as_str()),
        Some(CACHE_CONTROL_EXAMPLE)
    );

    let health = send(Method::GET, "/health").await;
    assert_eq!(
        header_str(&health, header::CACHE_CONTROL.as_str()),
        Some(CACHE_CONTROL_HEALTH)
    );
}

#[tokio::test]
async fn unknown_path_has_no_cache_control() {
    let response = send(Method::GET, "/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    for (method, uri) in [
        (Method::GET, "/"),
        (Method::GET, "/health"),
        (Method::GET, "/unknown"),
        (Method::POST, "/"),
    ] {
        let response = send(method.clone(), uri).await;
        let id = header_str(&response, "x-request-id")
            .unwrap_or_else(|| panic!("no x-request-id on {method} {uri}"));
        assert!(uuid::Uuid::parse_str(id).is_ok(), "not a UUID: {id}");
    }
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", id)
        .body(Body::empty())
        .unwrap();
    let response = create_router().oneshot(request).await.unwrap();

    assert_eq!(header_str(&response, "x-request-id"), Some(id));
}

#[tokio::test]
async fn invalid_incoming_request_id_is_replaced() {
    let request = Request::builder()
        .uri("/")
        .header("x-request-id", "abc")
        .body(Body::empty())
        .unwrap();
    let response = create_router().oneshot(request).await.unwrap();

    let id = header_str(&response, "x-request-id").unwrap();
    assert_ne!(id, "abc");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
