//! Landing page route handlers.
//!
//! Serves the embedded analyzer page and its script.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");
const SCRIPT_JS: &str = include_str!("../../../../assets/web/mywebscript.js");

/// GET / - Serve the analyzer page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /static/mywebscript.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
