//! PageBrief server - HTTP surface for the brief pipeline
//!
//! Request handling is a thin shell: each endpoint invokes the pipeline
//! from the `pagebrief` crate and serializes its return value. Routing,
//! CORS, static assets, and the OpenAPI document carry no pipeline logic.

mod openapi;
mod routes;

use clap::Parser;
use pagebrief::{BriefOptions, Budgets, Persona};
use routes::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

/// PageBrief - persona-wrapped web content briefs over HTTP
#[derive(Parser, Debug)]
#[command(name = "pagebrief-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Text character budget
    #[arg(long, default_value_t = pagebrief::DEFAULT_TEXT_BUDGET)]
    text_budget: usize,

    /// Image-list character budget
    #[arg(long, default_value_t = pagebrief::DEFAULT_IMAGE_BUDGET)]
    image_budget: usize,

    /// Publicly advertised base URL, used in the OpenAPI document
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    public_url: String,

    /// Search-engine base URL for the search endpoint
    #[arg(long, default_value = "https://html.duckduckgo.com/html/")]
    search_base: Url,

    /// Path to the plugin icon served at /icon.png
    #[arg(long, default_value = "icon.png")]
    icon: PathBuf,

    /// Path to the plugin manifest served at /ai-plugin.json
    #[arg(long, default_value = "ai-plugin.json")]
    manifest: PathBuf,

    /// JSON file overriding the built-in retriever persona
    #[arg(long)]
    retriever_persona: Option<PathBuf>,

    /// JSON file overriding the built-in searcher persona
    #[arg(long)]
    searcher_persona: Option<PathBuf>,
}

fn load_persona(override_path: Option<&PathBuf>, built_in: Persona) -> std::io::Result<Persona> {
    match override_path {
        Some(path) => Persona::from_json_file(path),
        None => Ok(built_in),
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let retriever = load_persona(args.retriever_persona.as_ref(), Persona::retriever())?;
    let searcher = load_persona(args.searcher_persona.as_ref(), Persona::searcher())?;

    let state = Arc::new(AppState {
        options: BriefOptions {
            budgets: Budgets {
                text_chars: args.text_budget,
                image_chars: args.image_budget,
            },
            ..Default::default()
        },
        retriever,
        searcher,
        search_base: args.search_base,
        icon_path: args.icon,
        manifest_path: args.manifest,
        openapi: openapi::document(&args.public_url),
    });

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(addr = %args.bind, "pagebrief server listening");
    axum::serve(listener, app).await
}
