//! Integration tests for the romanos REST API
//!
//! Covers both conversion endpoints, validation failures, the root
//! route, the catch-all 404 and CORS behavior.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use romanos::core::types::{ArabicResponse, MessageResponse, RomanResponse};
use romanos::http::SERVICE_DESCRIPTION;
use serde_json::json;

use crate::common::{get, get_json, send};

/// Assert a 400 with an `error` string in the body
async fn assert_bad_request(uri: &str) {
    let (status, body) = get_json(uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} should be rejected");
    assert!(
        body["error"].is_string(),
        "{uri} should carry an error message, got {body}"
    );
}

// =============================================================================
// GET /a2r
// =============================================================================

#[tokio::test]
async fn test_a2r_converts_123() {
    let (status, body) = get_json("/a2r?arabic=123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "roman": "CXXIII" }));
}

#[tokio::test]
async fn test_a2r_range_bounds() {
    let (status, body) = get_json("/a2r?arabic=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "roman": "I" }));

    let (status, body) = get_json("/a2r?arabic=3999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "roman": "MMMCMXCIX" }));
}

#[tokio::test]
async fn test_a2r_out_of_range() {
    for uri in ["/a2r?arabic=4000", "/a2r?arabic=0", "/a2r?arabic=-5"] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Number must be between 1 and 3999" }));
    }
}

#[tokio::test]
async fn test_a2r_missing_parameter() {
    let (status, body) = get_json("/a2r").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing \"arabic\" parameter" }));

    let (status, _) = get_json("/a2r?arabic=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_a2r_malformed_parameter() {
    let (status, body) = get_json("/a2r?arabic=123.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid \"arabic\" parameter" }));

    for uri in [
        "/a2r?arabic=abc",
        "/a2r?arabic=12abc",
        "/a2r?arabic=007",
        "/a2r?arabic=%2B123",
        "/a2r?arabic=%2012",
        "/a2r?arabic=1e3",
    ] {
        assert_bad_request(uri).await;
    }
}

#[tokio::test]
async fn test_a2r_repeated_parameter() {
    assert_bad_request("/a2r?arabic=1&arabic=2").await;
}

#[tokio::test]
async fn test_a2r_ignores_unrelated_parameters() {
    let (status, body) = get_json("/a2r?arabic=14&roman=X").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "roman": "XIV" }));
}

// =============================================================================
// GET /r2a
// =============================================================================

#[tokio::test]
async fn test_r2a_converts_cxxiii() {
    let (status, body) = get_json("/r2a?roman=CXXIII").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "arabic": 123 }));
}

#[tokio::test]
async fn test_r2a_range_bounds() {
    let (_, body) = get_json("/r2a?roman=I").await;
    assert_eq!(body, json!({ "arabic": 1 }));

    let (_, body) = get_json("/r2a?roman=MMMCMXCIX").await;
    assert_eq!(body, json!({ "arabic": 3999 }));
}

#[tokio::test]
async fn test_r2a_missing_parameter() {
    let (status, body) = get_json("/r2a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing \"roman\" parameter" }));

    assert_bad_request("/r2a?roman=").await;
}

#[tokio::test]
async fn test_r2a_invalid_numerals() {
    let (status, body) = get_json("/r2a?roman=ABC").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid \"roman\" parameter" }));

    for uri in [
        "/r2a?roman=IIII",
        "/r2a?roman=VX",
        "/r2a?roman=MMMM",
        "/r2a?roman=cxxiii",
        "/r2a?roman=X%20I",
        "/r2a?roman=MMMMMMMMMMMMMMMMMMMM",
    ] {
        assert_bad_request(uri).await;
    }
}

#[tokio::test]
async fn test_round_trip_444() {
    let response = get("/a2r?arabic=444").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let roman: RomanResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(roman.roman, "CDXLIV");

    let response = get(&format!("/r2a?roman={}", roman.roman)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let arabic: ArabicResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(arabic.arabic, 444);
}

// =============================================================================
// Root, fallback and response format
// =============================================================================

#[tokio::test]
async fn test_root_message() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let message: MessageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(message.message, SERVICE_DESCRIPTION);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    for uri in ["/nope", "/a2r/extra", "/api/a2r?arabic=1"] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Route not found" }));
    }
}

#[tokio::test]
async fn test_unsupported_method_is_404() {
    let response = send(
        Request::builder()
            .method(Method::POST)
            .uri("/a2r?arabic=5")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_responses_are_json() {
    for uri in ["/", "/a2r?arabic=9", "/r2a?roman=IX", "/a2r", "/missing"] {
        let response = get(uri).await;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("application/json"),
            "{uri} returned content-type {content_type:?}"
        );
    }
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = send(
        Request::builder()
            .uri("/a2r?arabic=10")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = send(
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/r2a")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");

    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods:?}");
    }

    let allowed_headers = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
}
