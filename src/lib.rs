pub mod api;
pub mod config;
pub mod error;
pub mod gnews;

use std::sync::Arc;
use config::Config;
use gnews::NewsClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub news: NewsClient,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let config = Arc::new(config);
        let news = NewsClient::new(Arc::clone(&config))?;
        Ok(Self { config, news })
    }
}
