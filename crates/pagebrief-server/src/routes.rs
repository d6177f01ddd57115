//! HTTP routes
//!
//! Two pipeline endpoints (direct URL retrieval and search-engine
//! retrieval), two static asset passthroughs, and the OpenAPI document.
//! Pipeline failures of any flavor become the uniform 500 JSON envelope;
//! missing asset files are deployment problems and return bare 500s.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pagebrief::{brief_url, Brief, BriefError, BriefOptions, Persona};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::error;
use url::Url;

/// Shared state built once at startup
pub struct AppState {
    /// Pipeline configuration (budgets, fetch timeouts)
    pub options: BriefOptions,
    /// Persona for the direct-retrieval endpoint
    pub retriever: Persona,
    /// Persona for the search endpoint
    pub searcher: Persona,
    /// Search-engine base URL the topic is templated into
    pub search_base: Url,
    /// Local file served at /icon.png
    pub icon_path: PathBuf,
    /// Local file served at /ai-plugin.json
    pub manifest_path: PathBuf,
    /// OpenAPI document synthesized at startup
    pub openapi: serde_json::Value,
}

/// Assemble the router. CORS is wide open, as the plugin contract expects.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get-url-content/", get(get_url_content))
        .route("/search-web/", get(search_web))
        .route("/icon.png", get(icon))
        .route("/ai-plugin.json", get(manifest))
        .route("/openapi.json", get(openapi_document))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Query parameters for /get-url-content/
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UrlContentParams {
    /// url to fetch content from
    pub url: String,
}

/// Query parameters for /search-web/
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchWebParams {
    /// topic to look up in the search engine
    pub search_topic: String,
    /// the user's original question, passed through into the reply
    pub users_query: String,
}

async fn get_url_content(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UrlContentParams>,
) -> Response {
    match brief_url(&params.url, &state.options).await {
        Ok(brief) => brief_response(&state.retriever, &brief, None),
        Err(err) => error_response(&state.retriever, &err),
    }
}

async fn search_web(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchWebParams>,
) -> Response {
    let mut target = state.search_base.clone();
    target
        .query_pairs_mut()
        .append_pair("q", &params.search_topic);

    match brief_url(target.as_str(), &state.options).await {
        Ok(brief) => brief_response(&state.searcher, &brief, Some(&params.users_query)),
        Err(err) => error_response(&state.searcher, &err),
    }
}

/// 200 text/plain persona-wrapped brief
fn brief_response(persona: &Persona, brief: &Brief, users_query: Option<&str>) -> Response {
    let block = brief.render_block();
    let body = persona.wrap(&block, !brief.images.is_empty(), users_query);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// 500 JSON envelope with the error text interpolated into the persona
fn error_response(persona: &Persona, err: &BriefError) -> Response {
    error!(error = %err, "brief pipeline failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": persona.error_message(&err.to_string()) })),
    )
        .into_response()
}

async fn icon(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read(&state.icon_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(err) => {
            error!(path = %state.icon_path.display(), error = %err, "icon not readable");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn manifest(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.manifest_path).await {
        Ok(raw) => ([(header::CONTENT_TYPE, "application/json")], raw).into_response(),
        Err(err) => {
            error!(path = %state.manifest_path.display(), error = %err, "manifest not readable");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn openapi_document(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.openapi.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state() -> AppState {
        AppState {
            options: BriefOptions::default(),
            retriever: Persona::retriever(),
            searcher: Persona::searcher(),
            search_base: Url::parse("https://html.duckduckgo.com/html/").unwrap(),
            icon_path: PathBuf::from("does-not-exist.png"),
            manifest_path: PathBuf::from("does-not-exist.json"),
            openapi: crate::openapi::document("http://127.0.0.1:8080"),
        }
    }

    async fn spawn_app(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(Arc::new(state))).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_get_url_content_success() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<html><body><p>Hello from upstream.</p></body></html>",
                "text/html",
            ))
            .mount(&upstream)
            .await;

        let base = spawn_app(test_state()).await;
        let resp = reqwest::get(format!(
            "{base}/get-url-content/?url={}/page",
            upstream.uri()
        ))
        .await
        .unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        assert!(resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = resp.text().await.unwrap();
        assert!(body.contains("Your name is Echo"));
        assert!(body.contains("text_content: |"));
        assert!(body.contains("Hello from upstream."));
    }

    #[tokio::test]
    async fn test_get_url_content_failure_envelope() {
        let base = spawn_app(test_state()).await;

        // Nothing listens on port 1
        let resp = reqwest::get(format!("{base}/get-url-content/?url=http://127.0.0.1:1/"))
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 500);
        let body: serde_json::Value = resp.json().await.unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("Sorry, the url is not available."));
    }

    #[tokio::test]
    async fn test_search_web_templates_topic_and_echoes_query() {
        let engine = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html/"))
            .and(query_param("q", "rust language"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<html><body><p>Search results about Rust.</p></body></html>",
                "text/html",
            ))
            .mount(&engine)
            .await;

        let mut state = test_state();
        state.search_base = Url::parse(&format!("{}/html/", engine.uri())).unwrap();
        let base = spawn_app(state).await;

        let resp = reqwest::get(format!(
            "{base}/search-web/?search_topic=rust%20language&users_query=what%20is%20rust%3F"
        ))
        .await
        .unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        let body = resp.text().await.unwrap();
        assert!(body.contains("The user originally asked: what is rust?"));
        assert!(body.contains("Search results about Rust."));
    }

    #[tokio::test]
    async fn test_missing_url_param_rejected() {
        let base = spawn_app(test_state()).await;
        let resp = reqwest::get(format!("{base}/get-url-content/")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let base = spawn_app(test_state()).await;
        let resp = reqwest::get(format!("{base}/openapi.json")).await.unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        let doc: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(doc["servers"][0]["url"], "http://127.0.0.1:8080");
        assert!(doc["paths"]["/get-url-content/"]["get"]["operationId"].is_string());
        assert!(doc.get("components").is_none());
    }

    #[tokio::test]
    async fn test_manifest_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("ai-plugin.json");
        std::fs::write(&manifest_path, r#"{"schema_version": "v1"}"#).unwrap();

        let mut state = test_state();
        state.manifest_path = manifest_path;
        let base = spawn_app(state).await;

        let resp = reqwest::get(format!("{base}/ai-plugin.json")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["schema_version"], "v1");
    }

    #[tokio::test]
    async fn test_missing_assets_are_server_errors() {
        let base = spawn_app(test_state()).await;

        let resp = reqwest::get(format!("{base}/icon.png")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 500);

        let resp = reqwest::get(format!("{base}/ai-plugin.json")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 500);
    }
}
