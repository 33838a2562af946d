use crate::domain::error::TlError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TlError> {
        let http_client = create_client(config.http_proxy.as_deref())?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            http_client,
        })
    }
}
