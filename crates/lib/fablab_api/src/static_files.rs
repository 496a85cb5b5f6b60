//! Static site responder.
//!
//! Serves regular files below a fixed root; `/` maps to `index.html`. Paths with
//! `..` components, directories, and anything that is not an existing file get
//! a 404. Only `GET` and `HEAD` read files; other methods get the same 404.

use std::path::Path;

use axum::Router;
use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri};
use axum::middleware::map_request;
use tower_http::services::ServeDir;

const INDEX_PATH: &str = "/index.html";

/// Router that answers every request from `root`.
pub fn router(root: &Path) -> Router {
    let serve_dir = ServeDir::new(root)
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .fallback_service(serve_dir)
        .layer(map_request(root_to_index))
}

async fn root_to_index(mut request: Request) -> Request {
    if request.uri().path() == "/" {
        *request.uri_mut() = Uri::from_static(INDEX_PATH);
    }
    request
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
