use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Deployment environment the frontend was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Resolve the environment from `LIVE_TDA_ENV`, falling back to the
    /// build profile when the variable is unset.
    pub fn detect() -> Self {
        match std::env::var("LIVE_TDA_ENV") {
            Ok(value) if value == "production" => Self::Production,
            Ok(_) => Self::Development,
            Err(_) => {
                if cfg!(debug_assertions) {
                    Self::Development
                } else {
                    Self::Production
                }
            }
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Paths the webview needs at startup.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_path: String,
    pub public_path: String,
}

impl RuntimeConfig {
    /// Select the path pair for an environment. Kept a pure function of
    /// the flag so it is testable without touching the process environment.
    pub fn for_env(env: Environment) -> Self {
        if env.is_production() {
            Self {
                api_path: "https://live-tda.herokuapp.com/api/".to_string(),
                public_path: "/live-tda/".to_string(),
            }
        } else {
            Self {
                api_path: "http://localhost:8000/api/".to_string(),
                public_path: "/".to_string(),
            }
        }
    }

    /// Effective API path after applying the user override from settings.
    pub fn effective_api_path(&self, settings: &Settings) -> String {
        settings
            .api_path_override
            .clone()
            .unwrap_or_else(|| self.api_path.clone())
    }
}

/// User-adjustable settings persisted as settings.json.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// UI language, must name a catalog in the locale directory
    pub locale: String,
    /// Points the client at a non-default backend (e.g. a local instance)
    #[serde(default)]
    pub api_path_override: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            api_path_override: None,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
            log::warn!("Unreadable settings at {:?}, using defaults", self.config_path);
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
