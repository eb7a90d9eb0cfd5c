//! Application configuration. Listen address, AI backend credentials.

use serde::Deserialize;
use std::net::SocketAddr;

/// Default bind address (all interfaces, port 8000).
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Default timeout for one model completion call, in seconds.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Socket address for the HTTP server. Read from FOCUS_ASSIST_LISTEN_ADDR.
    #[serde(default)]
    pub listen_addr: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // AI Backend Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key (e.g., OpenAI). Read from FOCUS_ASSIST_AI_API_KEY or AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from FOCUS_ASSIST_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from FOCUS_ASSIST_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Completion request timeout in seconds. Read from FOCUS_ASSIST_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FOCUS_ASSIST"));
        if let Ok(path) = std::env::var("FOCUS_ASSIST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // AI_API_KEY is read directly (no prefix) so existing deployments keep working
        cfg.apply_unprefixed_key(std::env::var("AI_API_KEY").ok());
        Ok(cfg)
    }

    /// Use `fallback` as the AI key when the prefixed key is missing or blank.
    fn apply_unprefixed_key(&mut self, fallback: Option<String>) {
        if self.ai_api_key().is_none() {
            if let Some(key) = fallback.filter(|k| !k.trim().is_empty()) {
                self.ai_api_key = Some(key);
            }
        }
    }

    /// Returns the listen address. Falls back to DEFAULT_LISTEN_ADDR if unset or unparsable.
    pub fn listen_addr_or_default(&self) -> SocketAddr {
        self.listen_addr
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the AI API key if configured and non-blank.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns the completion timeout in seconds. Defaults to 30.
    pub fn ai_timeout_secs_or_default(&self) -> u64 {
        self.ai_timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
    }

    /// Returns true if the model-backed generator should be used (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.listen_addr_or_default().to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.ai_timeout_secs_or_default(), 30);
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_blank_key_means_heuristic() {
        let cfg = AppConfig {
            ai_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_unprefixed_key_used_when_prefixed_blank() {
        let mut cfg = AppConfig {
            ai_api_key: Some(String::new()),
            ..Default::default()
        };
        cfg.apply_unprefixed_key(Some("sk-fallback".to_string()));
        assert_eq!(cfg.ai_api_key().as_deref(), Some("sk-fallback"));
        assert!(cfg.is_ai_configured());
    }

    #[test]
    fn test_unprefixed_key_used_when_prefixed_missing() {
        let mut cfg = AppConfig::default();
        cfg.apply_unprefixed_key(Some("sk-fallback".to_string()));
        assert_eq!(cfg.ai_api_key().as_deref(), Some("sk-fallback"));
    }

    #[test]
    fn test_prefixed_key_wins_over_unprefixed() {
        let mut cfg = AppConfig {
            ai_api_key: Some("sk-prefixed".to_string()),
            ..Default::default()
        };
        cfg.apply_unprefixed_key(Some("sk-fallback".to_string()));
        assert_eq!(cfg.ai_api_key().as_deref(), Some("sk-prefixed"));
    }

    #[test]
    fn test_blank_unprefixed_key_ignored() {
        let mut cfg = AppConfig::default();
        cfg.apply_unprefixed_key(Some("  ".to_string()));
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_explicit_values() {
        let cfg = AppConfig {
            listen_addr: Some("127.0.0.1:9100".to_string()),
            ai_api_key: Some("sk-123".to_string()),
            ai_model: Some("llama3.2".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.listen_addr_or_default().port(), 9100);
        assert!(cfg.is_ai_configured());
        assert_eq!(cfg.ai_model_or_default(), "llama3.2");
    }

    #[test]
    fn test_unparsable_listen_addr_falls_back() {
        let cfg = AppConfig {
            listen_addr: Some("not an address".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.listen_addr_or_default().port(), 8000);
    }
}
