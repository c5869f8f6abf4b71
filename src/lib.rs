//! # mget
//!
//! Concurrent retrieval of many URLs, aggregated into one keyed result set.
//!
//! ## Architecture
//!
//! ```text
//! locators → ParallelFetcher → (one task per locator) → HttpFetcher
//!                 ↑                                          │
//!                 └──────── completion channel ←─────────────┘
//! ```
//!
//! Every locator ends up with exactly one [`Outcome`](domain::Outcome):
//! the body on a 2xx response, or a [`FetchError`](fetcher::FetchError)
//! describing a connection failure, a truncated body, or a non-2xx status
//! (in which case the body is still available). The batch call itself
//! never fails.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mget::fetcher::http_fetcher::HttpFetcher;
//! use mget::fetcher::parallel::ParallelFetcher;
//!
//! # async fn demo() -> mget::app::Result<()> {
//! let fetcher = ParallelFetcher::new(Arc::new(HttpFetcher::new()?));
//! let results = fetcher
//!     .fetch_all(["https://example.com/a", "https://example.com/b"])
//!     .await;
//!
//! for (url, outcome) in &results {
//!     match outcome.error() {
//!         None => println!("{}: {} bytes", url, outcome.payload().unwrap_or_default().len()),
//!         Some(e) => println!("{}: {}", url, e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration, the HTTP
/// fetcher and the parallel fetcher together.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/mget/config.toml`.
pub mod config;

/// Command-line interface using clap.
pub mod cli;

/// Core domain models.
///
/// - [`Outcome`](domain::Outcome): per-locator success or failure
/// - [`ResultSet`](domain::ResultSet): locator → outcome map
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for single-resource fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): Concurrent fan-out/fan-in
pub mod fetcher;

/// Text and JSON reports over a result set.
pub mod report;
