use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sqs_core::{InMemoryQueue, MessageQueue};
use sqs_server::{AppState, Cli, logging, router, server};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file).context("creating logger")?;

    let addrs = cli.listen_addrs().await?;

    // One queue for the lifetime of the process.
    let queue: Arc<dyn MessageQueue> = Arc::new(InMemoryQueue::new());
    let app = router(AppState::new(queue));

    let listener = TcpListener::bind(addrs.as_slice())
        .await
        .with_context(|| format!("binding {}:{}", cli.host, cli.port))?;
    tracing::info!("server listening on {}", listener.local_addr()?);

    server::run(listener, app).await
}
