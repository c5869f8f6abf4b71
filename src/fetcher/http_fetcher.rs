use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::app::Result;
use crate::config::HttpConfig;
use crate::domain::Outcome;
use crate::fetcher::{FetchError, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .gzip(config.gzip)
            .brotli(config.brotli)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Outcome {
        let response = match self.client.get(locator).send().await {
            Ok(response) => response,
            Err(e) => return Outcome::Failure(FetchError::Connection(e)),
        };

        let status = response.status();

        // Partial bodies are dropped along with the response
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return Outcome::Failure(FetchError::Read(e)),
        };

        classify(status, body)
    }
}

/// Map a fully read response onto an outcome by status class.
pub(crate) fn classify(status: StatusCode, body: Vec<u8>) -> Outcome {
    if status.is_success() {
        Outcome::Success(body)
    } else {
        Outcome::Failure(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
