//! CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Environment variable that overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "SHOP_API_BASE_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// REST service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply a base URL override, typically from [`BASE_URL_ENV`].
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Directory holding the persisted cart.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage
            .dir
            .clone()
            .unwrap_or_else(|| data_dir().join("shop-cli").join("storage"))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// REST service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Origin that image paths such as `/api/image/x.png` are served from.
    /// Defaults to the origin of `base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:42835/api".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            image_base_url: None,
        }
    }
}

impl ApiConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an image path returned by the service.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self
            .image_base_url
            .as_deref()
            .unwrap_or_else(|| origin(&self.base_url));
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// `scheme://host[:port]` part of a URL.
fn origin(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(path_start) => &url[..scheme_end + 3 + path_start],
                None => url,
            }
        }
        None => "",
    }
}

/// Local storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory for persisted client state. Defaults to the user data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# ShopFront CLI configuration

[api]
base_url = "{base_url}"
timeout_secs = {timeout}
# image_base_url = "http://localhost:42835"

[storage]
# dir = "/path/to/storage"
"#,
        base_url = default_base_url(),
        timeout = default_timeout_secs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:42835/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(60));
        assert!(config.storage_dir().ends_with("shop-cli/storage"));
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://shop.example.com/api\"\n\n[storage]\ndir = \"/var/shop\"\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com/api");
        assert_eq!(config.api.timeout_secs, 60);
        assert_eq!(config.storage_dir(), PathBuf::from("/var/shop"));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        std::fs::write(&path, r#"{"api": {"timeout_secs": 5}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        let mut config = CliConfig::default();
        config.api.image_base_url = Some("https://img.example.com".into());
        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = CliConfig::default()
            .with_base_url_override(Some(" http://10.0.0.2:8080/api ".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8080/api");

        let config = CliConfig::default().with_base_url_override(Some(String::new()));
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_image_url() {
        let mut api = ApiConfig::default();
        assert_eq!(
            api.image_url("/api/image/a.png"),
            "http://localhost:42835/api/image/a.png"
        );
        assert_eq!(
            api.image_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );

        api.image_base_url = Some("https://shop.example.com/".into());
        assert_eq!(
            api.image_url("/api/image/a.png"),
            "https://shop.example.com/api/image/a.png"
        );
    }

    #[test]
    fn test_origin() {
        assert_eq!(origin("http://localhost:42835/api"), "http://localhost:42835");
        assert_eq!(origin("https://shop.example.com"), "https://shop.example.com");
        assert_eq!(origin("/api"), "");
    }
}
