//! Application configuration.
//!
//! An embedded TOML document provides defaults; `FERTI_*` variables present at
//! build time override single keys. Empty base URLs are resolved from the
//! browser location when the value is needed.

use crate::shared::api_utils;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
download_base_url = ""

[frontend]
base_url = ""

[assets]
bucket = ""
cloudinary_cloud_name = ""

[notifications]
dismiss_ms = 4000
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub frontend: FrontendConfig,
    pub assets: AssetsConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// REST API origin, e.g. "https://api.example.com"
    #[serde(default)]
    pub base_url: String,
    /// Document download service; the API origin when empty
    #[serde(default)]
    pub download_base_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FrontendConfig {
    /// Origin used in public batch links; the current origin when empty
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssetsConfig {
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub cloudinary_cloud_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u32,
}

fn default_dismiss_ms() -> u32 {
    4000
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match AppConfig::load() {
    Ok(config) => config,
    Err(e) => {
        log::error!("{}; falling back to built-in defaults", e);
        AppConfig::fallback()
    }
});

/// Process-wide configuration
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    /// Embedded defaults with build-time overrides applied
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        config.apply_overrides(build_env);
        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    fn fallback() -> Self {
        AppConfig {
            api: ApiConfig {
                base_url: String::new(),
                download_base_url: String::new(),
            },
            frontend: FrontendConfig {
                base_url: String::new(),
            },
            assets: AssetsConfig {
                bucket: String::new(),
                cloudinary_cloud_name: String::new(),
            },
            notifications: NotificationsConfig {
                dismiss_ms: default_dismiss_ms(),
            },
        }
    }

    /// Replace keys for which `lookup` returns a non-empty value
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets: [(&str, &mut String); 5] = [
            ("FERTI_API_BASE_URL", &mut self.api.base_url),
            ("FERTI_DOWNLOAD_BASE_URL", &mut self.api.download_base_url),
            ("FERTI_FRONTEND_BASE_URL", &mut self.frontend.base_url),
            ("FERTI_ASSET_BUCKET", &mut self.assets.bucket),
            ("FERTI_CLOUDINARY_CLOUD_NAME", &mut self.assets.cloudinary_cloud_name),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
    }

    /// REST API origin without a trailing slash
    pub fn api_base(&self) -> String {
        non_empty(&self.api.base_url).unwrap_or_else(api_utils::location_api_base)
    }

    pub fn download_base(&self) -> String {
        non_empty(&self.api.download_base_url).unwrap_or_else(|| self.api_base())
    }

    pub fn frontend_base(&self) -> String {
        non_empty(&self.frontend.base_url).unwrap_or_else(api_utils::location_origin)
    }

    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base(), path)
    }

    pub fn download_url(&self, stored_path: &str) -> String {
        format!(
            "{}/download/{}",
            self.download_base(),
            urlencoding::encode(stored_path)
        )
    }

    /// Link printed on labels and QR codes for a batch
    pub fn public_batch_url(&self, batch_id: &str) -> String {
        format!(
            "{}/batch/{}",
            self.frontend_base(),
            urlencoding::encode(batch_id)
        )
    }

    /// Resolve a stored product image reference into a URL the browser can load.
    ///
    /// Absolute, data and blob URLs pass through. Otherwise the reference is a
    /// Cloudinary public id, a bucket object key, or a path served by the API,
    /// in that order of preference.
    pub fn image_url(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if is_absolute_url(reference) {
            return Some(reference.to_string());
        }
        let key = reference.trim_start_matches('/');
        if let Some(cloud) = non_empty(&self.assets.cloudinary_cloud_name) {
            return Some(format!(
                "https://res.cloudinary.com/{}/image/upload/{}",
                cloud, key
            ));
        }
        if let Some(bucket) = non_empty(&self.assets.bucket) {
            return Some(format!("https://storage.googleapis.com/{}/{}", bucket, key));
        }
        Some(join_url(&self.api_base(), key))
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "FERTI_API_BASE_URL" => option_env!("FERTI_API_BASE_URL"),
        "FERTI_DOWNLOAD_BASE_URL" => option_env!("FERTI_DOWNLOAD_BASE_URL"),
        "FERTI_FRONTEND_BASE_URL" => option_env!("FERTI_FRONTEND_BASE_URL"),
        "FERTI_ASSET_BUCKET" => option_env!("FERTI_ASSET_BUCKET"),
        "FERTI_CLOUDINARY_CLOUD_NAME" => option_env!("FERTI_CLOUDINARY_CLOUD_NAME"),
        _ => None,
    };
    value.map(str::to_string)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim().trim_end_matches('/');
    (!value.is_empty()).then(|| value.to_string())
}

fn is_absolute_url(value: &str) -> bool {
    ["http://", "https://", "data:", "blob:", "//"]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AppConfig {
        let mut config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        config.api.base_url = "https://api.ferti.test/".into();
        config.frontend.base_url = "https://ferti.test".into();
        config
    }

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::fallback());
        assert_eq!(config.notifications.dismiss_ms, 4000);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        assert!(AppConfig::from_toml("[api\nbase_url=").is_err());
    }

    #[test]
    fn test_overrides_replace_only_non_empty_values() {
        let mut config = configured();
        config.apply_overrides(|key| match key {
            "FERTI_DOWNLOAD_BASE_URL" => Some(" https://files.ferti.test ".into()),
            "FERTI_ASSET_BUCKET" => Some("".into()),
            _ => None,
        });
        assert_eq!(config.api.download_base_url, "https://files.ferti.test");
        assert_eq!(config.api.base_url, "https://api.ferti.test/");
        assert_eq!(config.assets.bucket, "");
    }

    #[test]
    fn test_urls() {
        let config = configured();
        assert_eq!(config.api_base(), "https://api.ferti.test");
        assert_eq!(config.api_url("/api/products"), "https://api.ferti.test/api/products");
        assert_eq!(config.download_base(), "https://api.ferti.test");
        assert_eq!(
            config.download_url("uploads/msds/a b.pdf"),
            "https://api.ferti.test/download/uploads%2Fmsds%2Fa%20b.pdf"
        );
        assert_eq!(
            config.public_batch_url("65f0c2"),
            "https://ferti.test/batch/65f0c2"
        );
    }

    #[test]
    fn test_image_url_resolution_order() {
        let mut config = configured();
        assert_eq!(config.image_url("  "), None);
        assert_eq!(
            config.image_url("https://cdn.test/a.png").as_deref(),
            Some("https://cdn.test/a.png")
        );
        assert_eq!(
            config.image_url("/uploads/a.png").as_deref(),
            Some("https://api.ferti.test/uploads/a.png")
        );

        config.assets.bucket = "ferti-assets".into();
        assert_eq!(
            config.image_url("products/a.png").as_deref(),
            Some("https://storage.googleapis.com/ferti-assets/products/a.png")
        );

        config.assets.cloudinary_cloud_name = "ferti".into();
        assert_eq!(
            config.image_url("products/a.png").as_deref(),
            Some("https://res.cloudinary.com/ferti/image/upload/products/a.png")
        );
    }
}
