//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub bind: String,
    #[serde(default = "default_true")]
    pub initial_harvest: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub urls: Vec<String>,
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: String,
    pub patterns: Vec<String>,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Compile the extraction patterns (case-insensitive).
    pub fn compiled_patterns(&self) -> Result<Vec<Regex>, SettingsError> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| SettingsError::InvalidValue {
                        field: format!("source.patterns[{i}]"),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

fn default_true() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(server.bind);
    if s.source.timeout_secs == 0 {
        return Err(SettingsError::InvalidValue {
            field: "source.timeout_secs".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    for (i, url) in s.source.urls.iter().enumerate() {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidValue {
                field: format!("source.urls[{i}]"),
                reason: "must be an http(s) URL".to_string(),
            });
        }
    }
    s.source.compiled_patterns()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.server.bind, "127.0.0.1:5001");
        assert!(s.server.initial_harvest);
        assert_eq!(s.source.urls.len(), 2);
        assert_eq!(s.source.timeout(), Duration::from_secs(10));
        assert_eq!(s.source.patterns.len(), 14);
        assert!(s.source.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn default_patterns_are_case_insensitive() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let patterns = s.source.compiled_patterns().unwrap();
        let m = patterns[0].find("Fatal ERROR: disk full. Retry").unwrap();
        assert_eq!(m.as_str(), "ERROR: disk full");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[server]
bind = "0.0.0.0:8080"
initial_harvest = false

[source]
urls = []
timeout_secs = 3
patterns = ['denied[^.]*']
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.server.bind, "0.0.0.0:8080");
        assert!(!s.server.initial_harvest);
        assert!(s.source.urls.is_empty());
        assert!(s.source.user_agent.is_empty());
    }

    #[test]
    fn initial_harvest_defaults_on() {
        let toml = r#"
[server]
bind = "127.0.0.1:5001"

[source]
timeout_secs = 10
patterns = []
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.server.initial_harvest);
    }

    #[test]
    fn error_zero_timeout() {
        let toml = r#"
[server]
bind = "127.0.0.1:5001"

[source]
timeout_secs = 0
patterns = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("source.timeout_secs"));
    }

    #[test]
    fn error_empty_bind() {
        let toml = r#"
[server]
bind = " "

[source]
timeout_secs = 10
patterns = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("server.bind"));
    }

    #[test]
    fn error_bad_url() {
        let toml = r#"
[server]
bind = "127.0.0.1:5001"

[source]
urls = ["ftp://example.com/"]
timeout_secs = 10
patterns = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("source.urls[0]"));
    }

    #[test]
    fn error_bad_pattern() {
        let toml = r#"
[server]
bind = "127.0.0.1:5001"

[source]
timeout_secs = 10
patterns = ['error[^.]*', '(unclosed']
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("source.patterns[1]"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[server]
bind = "127.0.0.1:5001"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
