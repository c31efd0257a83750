use crate::adapters::http::{router, AppState};
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self {
            router: router(state),
        }
    }

    pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serves until Ctrl-C.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("👋 Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時就持續服務
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
