//! Configuration management for mmview
//!
//! Resolves the API base URLs and rendering switches the web client reads
//! from its `PUBLIC_*` environment. Every value follows the same chain:
//! environment variable, then the config file at
//! ~/.config/mmview/config.toml, then a built-in default. The environment is
//! applied once with [`Config::with_env`]; after that a `Config` is a plain
//! value and its accessors read nothing else.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// API base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

pub const ENV_API_URL: &str = "PUBLIC_API_URL";
pub const ENV_SSR_API_URL: &str = "PUBLIC_SSR_API_URL";
pub const ENV_WEB_SSR: &str = "PUBLIC_WEB_SSR";

/// Where a URL is going to be requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderContext {
    /// The user's browser
    #[default]
    Browser,
    /// The server-side renderer, which may reach the API on an internal address
    Server,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API base URL as seen from the browser
    pub api_url: Option<String>,
    /// API base URL as seen from the server-side renderer
    pub ssr_api_url: Option<String>,
    /// Render pages on the server
    pub web_ssr: Option<bool>,
    /// Print JSON envelopes by default
    pub json: Option<bool>,
}

impl Config {
    /// Get config file path (~/.config/mmview/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mmview").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p).unwrap_or_default())
            .unwrap_or_default()
    }

    /// Load config from an explicit file. A missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path =
            Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&path)
    }

    /// Save config to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Overlay environment values on top of the file values.
    ///
    /// `lookup` maps a variable name to its value; empty values are ignored
    /// for the URLs. Call once after loading so the resulting value alone
    /// decides every URL.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            debug!(%url, "API URL from environment");
            self.api_url = Some(url);
        }
        if let Some(url) = non_empty(ENV_SSR_API_URL) {
            debug!(%url, "SSR API URL from environment");
            self.ssr_api_url = Some(url);
        }
        if let Some(flag) = lookup(ENV_WEB_SSR) {
            self.web_ssr = Some(parse_ssr_flag(Some(&flag)));
        }
        self
    }

    /// [`Config::with_env`] against the process environment
    pub fn with_process_env(self) -> Self {
        self.with_env(|key| std::env::var(key).ok())
    }

    /// Browser-facing API base URL, or [`DEFAULT_API_URL`]
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Server-side API base URL, falling back to the browser-facing one
    pub fn ssr_api_url(&self) -> String {
        self.ssr_api_url.clone().unwrap_or_else(|| self.api_url())
    }

    /// API base URL for the given render context, without a trailing slash
    pub fn api_base(&self, context: RenderContext) -> String {
        let url = match context {
            RenderContext::Browser => self.api_url(),
            RenderContext::Server => self.ssr_api_url(),
        };
        url.trim_end_matches('/').to_string()
    }

    /// Whether pages are rendered on the server
    pub fn ssr_enabled(&self) -> bool {
        self.web_ssr.unwrap_or(false)
    }
}

/// Interpret a `PUBLIC_WEB_SSR` value: only `true` in any letter case enables
/// SSR. Surrounding whitespace is not stripped, so `" true "` is false.
pub fn parse_ssr_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
