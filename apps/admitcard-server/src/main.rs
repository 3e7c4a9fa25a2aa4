//! Admit card portal server
//!
//! Serves the candidate login page and the files it depends on:
//!
//! - `/` - page shell with the server-rendered form
//! - `/pkg/*` - the wasm-pack bundle of `admitcard-wasm`
//! - `/files/*` - per-candidate admit card PDFs
//! - `/images/*` - logo and banner
//!
//! The server does no validation of its own. A missing PDF is a plain 404,
//! which the form reports as "File not found".

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use admitcard_core::PortalConfig;
use axum::{routing::get, Router};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod page;

use api::{handle_health, handle_index};

/// Command-line arguments for the admit card server
#[derive(Parser, Debug)]
#[command(name = "admitcard-server")]
#[command(about = "Static host for the admit card download portal")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Directory holding `files/` and `images/`
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    /// wasm-pack output directory
    #[arg(long, default_value = "apps/admitcard-web/wasm/pkg")]
    pkg_dir: PathBuf,

    /// Prefix the page uses when building admit card URLs
    #[arg(long, default_value = "")]
    static_root: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<PortalConfig>,
}

/// Filesystem locations served as-is
#[derive(Debug, Clone)]
pub struct StaticDirs {
    pub public_dir: PathBuf,
    pub pkg_dir: PathBuf,
}

/// Build the router; split out of `main` so tests can drive it directly
pub fn build_router(state: AppState, dirs: &StaticDirs) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .nest_service("/files", ServeDir::new(dirs.public_dir.join("files")))
        .nest_service("/images", ServeDir::new(dirs.public_dir.join("images")))
        .nest_service("/pkg", ServeDir::new(&dirs.pkg_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let portal = PortalConfig::default().with_static_file_root(args.static_root.clone());
    let state = AppState {
        portal: Arc::new(portal),
    };
    let dirs = StaticDirs {
        public_dir: args.public_dir.clone(),
        pkg_dir: args.pkg_dir.clone(),
    };

    if !dirs.public_dir.join("files").is_dir() {
        tracing::warn!(
            "{} does not exist; every admit card request will 404",
            dirs.public_dir.join("files").display()
        );
    }

    let app = build_router(state, &dirs);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Admit cards served from {}", dirs.public_dir.join("files").display());
    info!("Static file root for the page: {:?}", args.static_root);

    axum::serve(listener, app).await?;

    Ok(())
}
