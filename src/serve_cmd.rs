use anyhow::{Context, Result};
use tracing::info;

use projection_engine::api::{AppState, create_router};
use projection_engine::config::ConfigLoader;

use crate::cli::ServeArgs;

pub fn run(args: ServeArgs) -> Result<()> {
    let loader = ConfigLoader::load(&args.config)
        .with_context(|| format!("failed to load plan from {}", args.config.display()))?;
    info!(plan = %loader.config().name(), "Loaded plan");

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(serve(loader, args))
}

async fn serve(loader: ConfigLoader, args: ServeArgs) -> Result<()> {
    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;

    info!(addr = %args.addr, "Serving projection API");
    axum::serve(listener, router)
        .await
        .context("HTTP server failed")
}
