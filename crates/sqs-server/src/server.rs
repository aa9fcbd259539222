//! Listener loop with graceful shutdown.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How long in-flight requests get after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Serve until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    serve_until(listener, app, shutdown_signal()).await
}

/// Serve until `signal` resolves, then drain for at most `SHUTDOWN_GRACE`.
pub async fn serve_until<F>(listener: TcpListener, app: Router, signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, mut stopping_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        tracing::info!("shutting down...");
        let _ = stopping_tx.send(());
    });
    let mut server = std::pin::pin!(server.into_future());

    let signalled = tokio::select! {
        result = &mut server => {
            result.context("serving http")?;
            false
        }
        Ok(()) = &mut stopping_rx => true,
    };

    if signalled {
        match tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await {
            Ok(result) => result.context("serving http during shutdown")?,
            Err(_) => {
                tracing::error!(grace = ?SHUTDOWN_GRACE, "shutdown timed out, dropping open connections");
                return Ok(());
            }
        }
    }

    tracing::info!("server shut down successfully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
