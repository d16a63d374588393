use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;

use plantdesk::logging::init_tracing;
use plantdesk::metrics::{init_metrics, metrics_app, metrics_middleware};
use plantdesk::router::init_router;
use plantdesk::state::init_app_state;
use plantdesk_config::{ObservabilityConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "plantdesk")]
#[command(about = "PlantDesk API server", long_about = None)]
struct Args {
    /// JSON fixture to load into the store at startup
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Overrides the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let observability = ObservabilityConfig::from_env();
    init_tracing(&observability)?;
    let prometheus = init_metrics(&observability)?;

    let state = init_app_state(args.seed.as_deref()).await?;
    let mut app = init_router(state);
    if let Some(handle) = prometheus {
        app = app
            .merge(metrics_app(handle))
            .layer(axum::middleware::from_fn(metrics_middleware));
    }

    let mut server = ServerConfig::from_env();
    if let Some(port) = args.port {
        server.port = port;
    }

    let listener = tokio::net::TcpListener::bind(server.addr()).await?;
    tracing::info!(addr = %server.addr(), "Server listening");
    println!("🚀 Server running on http://{}", server.addr());
    println!("📚 Swagger UI available at http://{}/swagger-ui", server.addr());
    println!("📖 Scalar UI available at http://{}/scalar", server.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
