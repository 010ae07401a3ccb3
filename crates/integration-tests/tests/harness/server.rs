//! Live demo server bound to an ephemeral port

use faultline_config::Config;
use faultline_core::Reporter;
use faultline_server::Server;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Demo server running in the background until dropped
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _shutdown: DropGuard,
}

impl TestServer {
    /// Serve the demo routes with `config` and `reporter`
    pub async fn start(config: Config, reporter: Reporter) -> anyhow::Result<Self> {
        let router = Server::new(&config, reporter).into_router();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let token = CancellationToken::new();
        let stopped = token.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { stopped.cancelled().await })
                .await
                .ok();
        });

        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
            _shutdown: token.drop_guard(),
        })
    }

    /// Default configuration and a reporter with default display settings
    pub async fn start_default() -> anyhow::Result<Self> {
        Self::start(Config::default(), Reporter::default()).await
    }

    /// `GET path`, returning the status and the decoded JSON body
    pub async fn get_json(&self, path: &str) -> anyhow::Result<(u16, Value)> {
        let resp = self.client.get(self.url(path)).send().await?;
        Ok((resp.status().as_u16(), resp.json().await?))
    }

    /// `POST path` with a JSON body, returning the status and the decoded reply
    pub async fn post_json(&self, path: &str, body: &Value) -> anyhow::Result<(u16, Value)> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Ok((resp.status().as_u16(), resp.json().await?))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
