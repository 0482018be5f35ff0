//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderMap};
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

struct Rendered {
    status: StatusCode,
    headers: HeaderMap,
    html: String,
}

async fn render(error: &Error) -> Rendered {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let html = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    Rendered {
        status,
        headers,
        html,
    }
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string postgres://secret")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": "x" }));

    let rendered = render(&error).await;

    assert_eq!(rendered.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        rendered
            .headers
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(expected_trace_id.as_str())
    );
    assert!(rendered.html.contains("Internal server error"));
    assert!(!rendered.html.contains("postgres://secret"));
}

#[rstest]
#[actix_web::test]
async fn client_errors_render_their_message() {
    let error = Error::not_found("book 3 not found");

    let rendered = render(&error).await;

    assert_eq!(rendered.status, StatusCode::NOT_FOUND);
    assert!(
        rendered
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/html"))
    );
    assert!(rendered.html.contains("book 3 not found"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let rendered = render(&Error::invalid_request("bad")).await;
    assert!(rendered.headers.get(TRACE_ID_HEADER).is_none());
    assert!(rendered.html.contains("400 Bad Request"));
}

#[rstest]
fn redaction_keeps_trace_id_and_drops_details(expected_trace_id: String) {
    let error = Error::internal("boom")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": true }));

    let redacted = redact_if_internal(&error);

    assert_eq!(redacted.message(), "Internal server error");
    assert_eq!(redacted.trace_id(), Some(expected_trace_id.as_str()));
    assert!(redacted.details().is_none());
}

#[rstest]
fn client_errors_are_not_redacted() {
    let error = Error::conflict("book 1 already exists");
    assert_eq!(redact_if_internal(&error), error);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
