use std::path::Path;

use crate::app::{AppContext, MgetError, Result};
use crate::cli::Cli;
use crate::report::Report;

/// Run one fetch batch. Returns the number of failed locators.
pub async fn fetch(ctx: &AppContext, cli: &Cli) -> Result<usize> {
    let mut urls = cli.urls.clone();
    if let Some(path) = &cli.input {
        urls.extend(read_locators(path)?);
    }

    if urls.is_empty() {
        return Err(MgetError::Other(
            "No URLs given; pass them as arguments or with --input".into(),
        ));
    }

    tracing::info!("Fetching {} URLs", urls.len());

    let results = ctx.parallel_fetcher.fetch_all(urls).await;

    for (url, outcome) in &results {
        if let Some(e) = outcome.error() {
            tracing::warn!("Fetch failed for {}: {}", url, e);
        }
    }

    let mut report = Report::from_results(&results, ctx.config.output.preview_bytes);

    if let Some(dir) = &cli.output_dir {
        report.write_payloads(&results, dir)?;
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(report.failures())
}

/// Read locators from a file: one per line, blank lines and `#` comments skipped
pub fn read_locators(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_locators(&content))
}

fn parse_locators(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
