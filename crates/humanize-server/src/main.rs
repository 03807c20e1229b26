use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use humanize_server::config::ServerConfig;
use humanize_server::InnerAppState;
use humanize_service::{create_detector, Detector, OpenAiRewriter, Rewriter};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let timeout = config.timeout();

    if config.openai_api_key.is_none() {
        warn!("no OPENAI_API_KEY set, rewrite requests will fail");
    }
    let rewriter = Arc::new(OpenAiRewriter::new(
        &config.openai_url,
        config.openai_api_key.clone(),
        &config.rewrite_model,
        timeout,
    ));
    info!(
        "rewrite backend: {} (model {})",
        rewriter.name(),
        config.rewrite_model
    );

    let detector = create_detector(&config.gptzero_url, config.gptzero_api_key.clone(), timeout);
    info!("detection mode: {}", detector.mode().as_str());

    let state = Arc::new(InnerAppState { rewriter, detector });

    let addr = SocketAddr::new(config.bind.parse()?, config.port);
    let listener = TcpListener::bind(addr).await?;
    info!("humanize-server listening on http://{addr}");

    humanize_server::serve(listener, state).await?;

    Ok(())
}
