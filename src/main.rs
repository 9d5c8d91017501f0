// src/main.rs

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use aula::api::http::api_router;
use aula::config::CONFIG;
use aula::content::ContentStore;
use aula::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "aula", about = "Backend for the UNPilar faculty dashboard")]
struct Args {
    /// Bind host (overrides AULA_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides AULA_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// JSON file replacing the built-in content tables (overrides AULA_CONTENT_PATH)
    #[arg(long)]
    content: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Aula backend");
    info!("Model: {}", CONFIG.gemini_model);
    if CONFIG.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; assist calls will fail and be collapsed");
    }

    // Content tables: built-ins unless a JSON override is configured
    let content_path = args.content.clone().or_else(|| CONFIG.content_path.clone());
    let content = match &content_path {
        Some(path) => {
            info!("Loading content tables from {}", path);
            ContentStore::from_file(path)?
        }
        None => ContentStore::builtin(),
    };
    info!(
        "Content loaded: {} events, {} resource categories, {} tutorials",
        content.events.len(),
        content.resources.len(),
        content.tutorials.len()
    );

    let app_state = Arc::new(AppState::assemble(&CONFIG, content)?);

    // The dashboard runs in a browser on its own origin
    let cors = CorsLayer::new()
        .allow_origin(CONFIG.cors_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api_router(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let host = args.host.as_deref().unwrap_or(&CONFIG.host);
    let port = args.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Dashboard API listening on http://{}/api", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
