//! Permissive CORS: the widget may be served from another origin or port.

use axum::{
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "POST, GET, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Axum middleware: answers every `OPTIONS` request with an empty 204 and adds
/// the CORS headers to all responses.
pub async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));

    response
}
