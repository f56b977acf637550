//! Aurora UI gallery server
//!
//! Entry point serving the component gallery.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use aurora_ui::config::AppConfig;
use aurora_ui::server::start_server;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = Arc::new(AppConfig::load()?);

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    info!(
        name: "gallery.config.loaded",
        title = %config.gallery.title,
        group_max = config.gallery.group_max,
        static_dir = %config.server.static_dir,
        "Gallery configuration loaded"
    );

    start_server(config).await
}
