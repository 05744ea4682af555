//! LoadBoard Server - Headless Daemon
//!
//! A small HTTP API that:
//! - Lists and creates upgrade requests on /api/upgrade-requests
//! - Lists and registers AI integrations on /api/ai-integrations
//! - Applies a credentialed CORS allow-list in front of every route
//!
//! Access via: http://localhost:4000

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

mod api;
mod cli;
mod commands;
mod error;
mod logging;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod router_tests;
#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use loadboard_core::{validate, ResourceStore};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_json)?;

    match &cli.command {
        None | Some(Commands::Serve) => serve(&cli).await,
        Some(Commands::CheckCors { json }) => commands::check_cors(&cli.access_policy(), *json),
    }
}

async fn serve(cli: &Cli) -> Result<()> {
    info!("🚀 LoadBoard API v{} starting on port {}...", env!("CARGO_PKG_VERSION"), cli.port);

    let policy = cli.access_policy();
    let report = validate(&policy);
    for finding in report.failures() {
        warn!("⚠️ CORS check '{}' failed: {}", finding.check.label(), finding.detail);
    }
    info!(
        "🔒 CORS allow-list: {:?} ({}/{} checks passed)",
        policy.allowed_origins,
        report.passed_count(),
        report.total()
    );

    let store = if cli.seed { ResourceStore::seeded() } else { ResourceStore::new() };
    if store.is_empty() {
        info!("📭 Starting with an empty store (pass --seed for demo records)");
    } else {
        info!(
            "📊 {} upgrade requests, {} AI integrations loaded",
            store.upgrade_request_count(),
            store.ai_integration_count()
        );
    }

    let app = router::build_router(AppState::new(store), &policy)
        .context("refusing to start with an unusable CORS policy")?;

    let listener = server_utils::create_listener(cli.host, cli.port).await?;
    info!("🌐 Server listening on http://{}", listener.local_addr()?);
    info!("🔌 API available at http://localhost:{}/api/", cli.port);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
