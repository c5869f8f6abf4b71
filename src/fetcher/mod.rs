pub mod http_fetcher;
pub mod parallel;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Outcome;

/// Why a single locator could not be fetched successfully.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or no response came back
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// A response arrived but its body could not be read in full
    #[error("Read error: {0}")]
    Read(#[source] reqwest::Error),

    /// Non-2xx response; the body is kept for inspection
    #[error("Status code: {status}")]
    Status { status: u16, body: Vec<u8> },

    /// The fetch task ended without reporting an outcome
    #[error("Fetch task failed: {0}")]
    Task(String),
}

/// Retrieves a single resource.
///
/// Implementations never return an error directly; every failure is
/// folded into the returned [`Outcome`].
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, locator: &str) -> Outcome;
}
