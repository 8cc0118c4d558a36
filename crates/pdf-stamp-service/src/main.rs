use clap::Parser;
use pdf_stamp::Stamper;
use pdf_stamp_service::{build_router, config::ServiceConfig, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pdf-stamp-service", about = "HTTP endpoint for PDF approval stamps", version)]
struct Args {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    tracing::info!("Starting PDF stamp service...");

    let mut config = ServiceConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    tracing::info!("Configuration loaded");

    let addr = config.bind_addr();
    let route = config.route.clone();
    if config.auth.function_key.is_none() {
        tracing::warn!("No function key configured; {} is unauthenticated", route);
    }

    let app = build_router(AppState::new(Stamper::default(), config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("PDF stamp service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET|POST {}", route);
    tracing::info!("  - GET      /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pdf_stamp=debug,pdf_stamp_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
