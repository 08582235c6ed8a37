mod file;
mod web;

use std::io;

use crate::settings::{SettingsError, SourceSettings};

pub use file::FileSource;
pub use web::{extract_fragments, html_to_text, WebSource};

/// A pluggable provider of raw text fragments for ingestion.
///
/// A failing source only loses its own fragments; the harvest carries on
/// with the others.
pub trait TextSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Produce this source's fragments for one harvest.
    fn fetch(&self) -> Result<Vec<String>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("HTTP status {0}")]
    Status(u16),
}

/// One [`WebSource`] per configured URL.
pub fn web_sources(s: &SourceSettings) -> Result<Vec<Box<dyn TextSource>>, SettingsError> {
    let patterns = s.compiled_patterns()?;
    Ok(s.urls
        .iter()
        .map(|url| {
            Box::new(WebSource::new(
                url.clone(),
                s.timeout(),
                s.user_agent.clone(),
                patterns.clone(),
            )) as Box<dyn TextSource>
        })
        .collect())
}
