use std::path::Path;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::parallel::ParallelFetcher;
use crate::fetcher::Fetcher;

pub struct AppContext {
    pub config: Config,
    pub parallel_fetcher: ParallelFetcher,
}

impl AppContext {
    /// Build a context from the user's config file, or from `config_path` when given.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_config(&config.http)?);
        let parallel_fetcher = ParallelFetcher::new(fetcher);

        Ok(Self {
            config,
            parallel_fetcher,
        })
    }
}
