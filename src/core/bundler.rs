// Bundler configuration for the SPA assets.
//
// This is declarative data consumed by the external web bundler when it
// packages the webview bundle; the host only produces the file.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::{Environment, RuntimeConfig};

/// Options for the bundler's localization plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nOptions {
    pub locale: String,
    pub fallback_locale: String,
    pub locale_dir: String,
    #[serde(rename = "enableInSFC")]
    pub enable_in_sfc: bool,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            locale_dir: "locales".to_string(),
            enable_in_sfc: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub i18n: I18nOptions,
}

/// Top-level bundler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub public_path: String,
    pub transpile_dependencies: Vec<String>,
    pub plugin_options: PluginOptions,
}

impl BundlerConfig {
    /// Bundler config for an environment. The public path follows the same
    /// selection as the runtime configuration.
    pub fn for_env(env: Environment) -> Self {
        Self {
            public_path: RuntimeConfig::for_env(env).public_path,
            transpile_dependencies: vec!["vuetify".to_string()],
            plugin_options: PluginOptions {
                i18n: I18nOptions::default(),
            },
        }
    }

    /// Write the config where the bundler picks it up
    pub fn write(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }
}
