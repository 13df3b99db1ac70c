//! Configuration management using config.toml

use portal_core::access::{default_allowed_domains, AccessGate};
use portal_core::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const CONFIG_PATH: &str = "config.toml";
const API_BASE_ENV: &str = "PORTAL_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the portal REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the portal web host (handbooks, checklists, forms)
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,

    /// Email domains allowed to sign in
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Email used on the last successful sign-in
    #[serde(default)]
    pub last_email: Option<String>,

    /// Font size in points (default: 14.0)
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Window width (None = default 1200)
    #[serde(default)]
    pub window_width: Option<f32>,

    /// Window height (None = default 800)
    #[serde(default)]
    pub window_height: Option<f32>,

    /// Window maximized state
    #[serde(default)]
    pub window_maximized: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_web_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            web_base_url: default_web_base_url(),
            allowed_domains: default_allowed_domains(),
            last_email: None,
            font_size: default_font_size(),
            window_width: None,
            window_height: None,
            window_maximized: false,
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        let mut config = Self::load_from(Path::new(CONFIG_PATH));
        if let Ok(url) = std::env::var(API_BASE_ENV) {
            if !url.trim().is_empty() {
                info!("Using API base URL from {}", API_BASE_ENV);
                config.api_base_url = url.trim().to_string();
            }
        }
        config
    }

    fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Error parsing {}: {}", path.display(), e),
                },
                Err(e) => warn!("Error reading {}: {}", path.display(), e),
            }
            return Config::default();
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            warn!("Could not create {}: {}", path.display(), e);
        }
        config
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PortalError::Config(e.to_string()))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PortalError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn access_gate(&self) -> AccessGate {
        AccessGate::new(&self.allowed_domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.allowed_domains.len(), 3);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::parse(
            "api_base_url = \"https://portal.example.com\"\nallowed_domains = [\"example.com\"]\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://portal.example.com");
        assert_eq!(config.font_size, 14.0);
        assert!(config.access_gate().is_allowed("a@example.com"));
        assert!(!config.access_gate().is_allowed("a@stinte.co"));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        assert!(matches!(Config::parse("font_size = \"big\""), Err(PortalError::Config(_))));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("portal-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.last_email = Some("amy@stinte.co".to_string());
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
        let _ = fs::remove_file(&path);
    }
}
