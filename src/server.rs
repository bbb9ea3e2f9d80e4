//! HTTP server lifecycle: bind, serve, and background spawn.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::create_router;
use crate::error::Result;

/// Bind a listener for the hello service.
///
/// Port 0 picks a free port; read it back with [`TcpListener::local_addr`].
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the hello router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Bind and serve in a background task.
///
/// Returns the bound address and the task handle. The server runs until the
/// handle is aborted or the runtime shuts down.
pub async fn spawn(addr: SocketAddr) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, std::future::pending()).await {
            error!("HTTP server error: {}", e);
        }
    });

    Ok((local_addr, handle))
}
