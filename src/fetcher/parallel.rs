use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{Outcome, ResultSet};
use crate::fetcher::{FetchError, Fetcher};

/// Fans a batch of locators out to one task each and gathers every outcome.
///
/// There is no concurrency cap: a call with N locators runs N fetches at once.
pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Fetch every locator concurrently and return once all have finished.
    ///
    /// Never fails: per-locator errors live in the returned outcomes.
    /// Duplicate locators each get a task; the map keeps whichever
    /// outcome arrives last.
    pub async fn fetch_all<I, S>(&self, locators: I) -> ResultSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locators: Vec<String> = locators.into_iter().map(Into::into).collect();
        let mut results = ResultSet::with_capacity(locators.len());

        if locators.is_empty() {
            return results;
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<(String, Outcome)>();

        for locator in &locators {
            let fetcher = self.fetcher.clone();
            let tx = tx.clone();
            let locator = locator.clone();

            tokio::spawn(async move {
                tracing::debug!("Fetching {}", locator);
                let outcome = fetcher.fetch(&locator).await;
                tracing::debug!(
                    "Fetched {} ({})",
                    locator,
                    if outcome.is_success() { "ok" } else { "failed" }
                );
                // Receiver only goes away if the caller's future was dropped
                let _ = tx.send((locator, outcome));
            });
        }

        // Only task-held senders remain, so recv() yields None once every task is gone
        drop(tx);

        let mut received = 0;
        while received < locators.len() {
            match rx.recv().await {
                Some((locator, outcome)) => {
                    results.insert(locator, outcome);
                    received += 1;
                }
                None => {
                    tracing::error!(
                        "{} fetch task(s) ended without reporting",
                        locators.len() - received
                    );
                    break;
                }
            }
        }

        for locator in locators {
            results.entry(locator).or_insert_with_key(|locator| {
                Outcome::Failure(FetchError::Task(format!(
                    "no outcome reported for {}",
                    locator
                )))
            });
        }

        results
    }

    /// Blocking variant of [`fetch_all`](Self::fetch_all) for callers
    /// outside a tokio runtime.
    pub fn fetch_all_blocking<I, S>(&self, locators: I) -> std::io::Result<ResultSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(self.fetch_all(locators)))
    }
}
