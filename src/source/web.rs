use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use super::{SourceError, TextSource};

/// Error phrases scraped from a web page.
///
/// The page is fetched with a bounded wait, reduced to its text content, and
/// every match of the extraction patterns becomes a fragment.
pub struct WebSource {
    url: String,
    user_agent: String,
    patterns: Vec<Regex>,
    agent: ureq::Agent,
}

impl WebSource {
    pub fn new(url: String, timeout: Duration, user_agent: String, patterns: Vec<Regex>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            url,
            user_agent,
            patterns,
            agent,
        }
    }

    fn download(&self) -> Result<String, SourceError> {
        let mut request = self.agent.get(&self.url);
        if !self.user_agent.is_empty() {
            request = request.header("User-Agent", &self.user_agent);
        }
        let response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(code) => SourceError::Status(code),
            other => SourceError::Http(format!("{}: {other}", self.url)),
        })?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::Http(format!("{}: {e}", self.url)))
    }
}

impl TextSource for WebSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<String>, SourceError> {
        let html = self.download()?;
        let text = html_to_text(&html);
        let fragments = extract_fragments(&text, &self.patterns);
        tracing::debug!(
            url = %self.url,
            bytes = html.len(),
            fragments = fragments.len(),
            "fetched page"
        );
        Ok(fragments)
    }
}

fn dropped_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
            .expect("block pattern is valid")
    })
}

fn tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"))
}

fn entities() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity pattern is valid")
    })
}

fn decode_entity(name: &str) -> Option<String> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some(c.to_string())
}

/// Text content of an HTML document.
///
/// Comments, scripts and styles are dropped. Tags are removed without a
/// separator, so adjacent cells run together ("FoundThe") and are left for
/// the camelCase splitter to pull apart.
pub fn html_to_text(html: &str) -> String {
    let without_blocks = dropped_blocks().replace_all(html, "");
    let without_tags = tags().replace_all(&without_blocks, "");
    entities()
        .replace_all(&without_tags, |caps: &regex::Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Every match of every pattern, pattern by pattern, in text order.
pub fn extract_fragments(text: &str, patterns: &[Regex]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}
