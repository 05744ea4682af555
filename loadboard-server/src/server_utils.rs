use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use listenfd::ListenFd;
use tokio::signal;
use tracing::info;

/// Take the systemd-activated socket if there is one, otherwise bind `host:port`.
pub async fn create_listener(host: IpAddr, port: u16) -> Result<tokio::net::TcpListener> {
    let mut listenfd = ListenFd::from_env();

    if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!("🔌 Using systemd socket activation (fd=3)");
        listener.set_nonblocking(true)?;
        return Ok(tokio::net::TcpListener::from_std(listener)?);
    }

    let addr = SocketAddr::new(host, port);
    tokio::net::TcpListener::bind(addr).await.with_context(|| format!("failed to bind {addr}"))
}

/// Resolves on Ctrl+C or SIGTERM; passed to `axum::serve` for graceful shutdown.
#[allow(clippy::expect_used)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Ctrl+C: LoadBoard API finishing open requests before exit"),
        () = terminate => info!("🛑 SIGTERM: LoadBoard API finishing open requests before exit"),
    }
}
