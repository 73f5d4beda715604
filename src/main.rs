//! HTTP server for the payroll engine.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bediende_payroll::api::{AppState, create_router};
use bediende_payroll::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "payroll-server")]
#[command(about = "Belgian bediende net pay and employer cost calculator")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Directory with one parameter directory per tax year.
    #[arg(long, default_value = "./config")]
    config: String,

    /// Log filter, e.g. `info` or `bediende_payroll=debug`.
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let addr: SocketAddr = args.listen.parse()?;
    let registry = ConfigLoader::load_registry(&args.config)?;
    tracing::info!(tax_years = ?registry.years(), config = %args.config, "loaded parameter tables");

    let router = create_router(AppState::new(registry));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "starting payroll server");
    axum::serve(listener, router).await?;

    Ok(())
}
