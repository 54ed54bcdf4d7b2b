use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use spindle_core::Service;
use spindle_core::store::InMemoryRepository;
use spindle_server::build_router;
use spindle_server::state::AppContext;

#[derive(Debug, Parser)]
#[command(name = "spindle-server", version, about = "In-memory task tracking API")]
struct Args {
    #[arg(long, env = "SPINDLE_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "SPINDLE_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let repo = Arc::new(InMemoryRepository::new());
    let service = Service::new(repo);
    let ctx = Arc::new(AppContext::new(service));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("task API listening on http://{addr}");

    axum::serve(listener, build_router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {err}");
    }
    info!("shutting down");
}
