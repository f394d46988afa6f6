use anyhow::{Context, Result};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flumen_backend::{create_router, AppState, ServiceConfig};

/// Fuel-station sales dashboard demo API
#[derive(Debug, Parser)]
#[command(name = "flumen-backend", version)]
struct Cli {
    /// TOML config file (defaults to ./flumen.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides FLUMEN_BIND
    #[arg(long)]
    bind: Option<IpAddr>,

    /// Listen port, overrides FLUMEN_PORT
    #[arg(long)]
    port: Option<u16>,
}

// =================== Main ===================
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // init tracing from env FLUMEN_LOG or RUST_LOG
    let filter = std::env::var("FLUMEN_LOG")
        .unwrap_or_else(|_| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = ServiceConfig::load(cli.config.as_deref()).context("loading config")?;
    config.apply_env();
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    info!(
        station_id = config.station_id,
        station = %config.station_name,
        origins = ?config.cors_origins,
        "Flumen API starting up"
    );

    let state = AppState::from_config(config).shared();
    state.initialize();

    let addr = state.config.listen_addr();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(listen = %addr, "Flumen API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested, demo state discarded");
        })
        .await
        .context("serving HTTP")?;
    Ok(())
}
