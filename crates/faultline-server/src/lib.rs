#![allow(clippy::must_use_candidate)]

mod demo;
mod error_handler;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use faultline_config::Config;
use faultline_core::Reporter;
use tower_http::trace::TraceLayer;

pub use demo::demo_router;
pub use error_handler::{HandlerError, handle, report_errors};

/// Demo server wired with the error-reporting middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// `reporter` is shared by every request for console reports.
    pub fn new(config: &Config, reporter: Reporter) -> Self {
        let reporter = Arc::new(reporter);

        let mut app = demo_router();

        // Health check
        if config.server.health {
            app = app.route("/health", axum::routing::get(health::health_handler));
        }

        // Error reporting
        app = app.layer(axum::middleware::from_fn_with_state(reporter, report_errors));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address: config.server.listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
