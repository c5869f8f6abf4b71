use std::error::Error as _;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::app::Result;
use crate::domain::{Outcome, ResultSet};
use crate::fetcher::FetchError;

/// One row of a fetch report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub url: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Payload length; status failures count their error body
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip)]
    preview: Option<String>,
}

/// Locator-sorted view over a [`ResultSet`].
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn from_results(results: &ResultSet, preview_bytes: usize) -> Self {
        let mut entries: Vec<ReportEntry> = results
            .iter()
            .map(|(url, outcome)| ReportEntry {
                url: url.clone(),
                ok: outcome.is_success(),
                status: outcome.status(),
                bytes: outcome.payload().map_or(0, <[u8]>::len),
                error: outcome.error().map(error_chain),
                file: None,
                preview: outcome
                    .payload()
                    .filter(|body| preview_bytes > 0 && !body.is_empty())
                    .map(|body| preview(body, preview_bytes)),
            })
            .collect();

        entries.sort_by(|a, b| a.url.cmp(&b.url));

        Self { entries }
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| !e.ok).count()
    }

    /// Write each successful payload into `dir`, recording the file on its entry.
    pub fn write_payloads(&mut self, results: &ResultSet, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        for entry in &mut self.entries {
            if let Some(Outcome::Success(body)) = results.get(&entry.url) {
                let path = dir.join(payload_file_name(&entry.url));
                fs::write(&path, body)?;
                tracing::debug!("Wrote {} bytes to {}", body.len(), path.display());
                entry.file = Some(path);
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for entry in &self.entries {
            let marker = if entry.ok { "ok  " } else { "FAIL" };
            let _ = write!(out, "{} {}", marker, entry.url);

            match &entry.error {
                Some(error) => {
                    let _ = write!(out, " - {}", error);
                }
                None => {
                    let _ = write!(out, " ({} bytes)", entry.bytes);
                }
            }
            if let Some(preview) = &entry.preview {
                let _ = write!(out, " {:?}", preview);
            }
            if let Some(file) = &entry.file {
                let _ = write!(out, " -> {}", file.display());
            }
            out.push('\n');
        }

        let failed = self.failures();
        let _ = writeln!(
            out,
            "{} fetched, {} failed",
            self.entries.len() - failed,
            failed
        );

        out
    }
}

/// Deterministic file name for a locator's payload
pub fn payload_file_name(locator: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(locator.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}

fn error_chain(err: &FetchError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn preview(body: &[u8], limit: usize) -> String {
    let end = body.len().min(limit);
    let mut text: String = String::from_utf8_lossy(&body[..end])
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if body.len() > limit {
        text.push_str("...");
    }
    text
}
