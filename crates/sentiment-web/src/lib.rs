//! Sentiment Web Server
//!
//! Axum-based web front-end for the sentiment analyzer.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port.
pub const DEFAULT_PORT: u16 = 5000;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .route("/static/mywebscript.js", get(routes::index::script))
        .route("/sentimentAnalyzer", get(routes::analyzer::sentiment_analyzer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use sentiment_core::KeywordAnalyzer;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Arc::new(KeywordAnalyzer)))
    }

    async fn get_text(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_analyzer_endpoint() {
        let (status, body) =
            get_text("/sentimentAnalyzer?textToAnalyze=I%20love%20this%2C%20it%20is%20great%20and%20amazing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "The given text has been identified as POSITIVE with a score of 0.99.");
    }

    #[tokio::test]
    async fn test_missing_parameter() {
        let (status, body) = get_text("/sentimentAnalyzer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, routes::analyzer::EMPTY_INPUT_MESSAGE);

        let (_, body) = get_text("/sentimentAnalyzer?textToAnalyze=%20%20").await;
        assert_eq!(body, routes::analyzer::EMPTY_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_text() {
        let (status, body) = get_text("/sentimentAnalyzer?textToAnalyze=asdkjh+qweiop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, routes::analyzer::INVALID_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/static/mywebscript.js"));
    }

    #[tokio::test]
    async fn test_script() {
        let response = app()
            .oneshot(Request::builder().uri("/static/mywebscript.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
    }
}
