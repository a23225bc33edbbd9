//! Configuration for the Narrator service
//!
//! Everything comes from the process environment, once, at startup. The
//! resulting struct is immutable and passed explicitly to the handlers and
//! the provider adapter.

use std::env;

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Models currently known to support speech generation upstream
pub const KNOWN_TTS_MODELS: &[&str] =
    &["gemini-2.5-pro-preview-tts", "gemini-2.5-flash-preview-tts"];

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tts: TtsConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream TTS provider configuration
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// API credential. May be absent at boot; every synthesis request then
    /// fails with a configuration error while `/` and `/health` stay up.
    pub api_key: Option<SecretString>,
    /// Default model when a request does not name one
    pub model: String,
    /// Override for the provider endpoint, used by tests
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tts: TtsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `GEMINI_API_KEY`, `TTS_MODEL`, `GEMINI_BASE_URL`, `HOST` and
    /// `PORT`. Only a malformed `PORT` is an error.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::ConfigError(format!("invalid PORT value: {raw}")))?,
            Err(_) => default_port(),
        };

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| default_host()),
                port,
            },
            tts: TtsConfig {
                api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::new),
                model: env::var("TTS_MODEL").unwrap_or_else(|_| default_model()),
                base_url: env::var("GEMINI_BASE_URL").ok(),
            },
        })
    }
}

impl TtsConfig {
    /// Model to use for one request: the requested one if non-empty,
    /// otherwise the configured default.
    pub fn resolve_model(&self, requested: Option<&str>) -> String {
        match requested.map(str::trim) {
            Some(model) if !model.is_empty() => model.to_string(),
            _ => self.model.clone(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model() -> String {
    "gemini-2.5-pro-preview-tts".to_string()
}
