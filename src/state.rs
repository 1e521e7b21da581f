use crate::config::Config;
use crate::services::UpstreamClient;
use std::sync::Arc;
use anyhow::Result;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        tracing::info!("[STATE] Initializing AppState...");
        let upstream = UpstreamClient::new(&config)?;
        tracing::info!("[STATE]   Upstream endpoint: {}", upstream.url());
        tracing::info!("[STATE]   Workspace: {}", config.workspace_id);
        tracing::info!("[STATE]   Static dir: {}", config.static_dir.display());

        Ok(Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
        })
    }
}
