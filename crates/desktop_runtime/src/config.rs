//! Shell configuration embedded at build time from `shell.config.toml`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{context_menu::MenuExclusion, model::WindowRect};

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

const DEFAULT_FOLDER_ICON: &str = "https://img.icons8.com/fluency/48/folder-invoices.png";

const DEFAULT_LOCK_WALLPAPER: &str = "https://wallpapercave.com/wp/wp5128415.jpg";

const DEFAULT_BACKGROUNDS: [&str; 4] = [
    "https://i.pinimg.com/736x/de/57/5d/de575dc6806bda9296e7e4b2de643b5b.jpg",
    "https://i.pinimg.com/736x/ad/fc/70/adfc70f15fa1bcb2647a40bb067b1668.jpg",
    "https://i.pinimg.com/736x/db/86/3f/db863f56b9857e665c7c2e522ae4d543.jpg",
    "https://i.pinimg.com/1200x/3a/76/82/3a768288bcab029d5b81e2c8a6e3acd4.jpg",
];

/// Errors raised while decoding or validating a [`ShellConfig`] document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shell config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("shell config is invalid: {0}")]
    Invalid(&'static str),
}

/// Cosmetic and layout settings for the desktop shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub welcome_banner_ms: u64,
    pub clock_tick_ms: u64,
    pub taskbar_height_px: i32,
    pub menu_exclusion: MenuExclusion,
    pub backgrounds: Vec<String>,
    pub default_window: WindowRect,
    pub cascade_step_px: i32,
    pub folder_icon: String,
    /// How long the "Shutting down..." notice shows before the screen goes fully black.
    pub shutdown_notice_ms: u64,
    pub unlock_pin: String,
    pub lock_wallpaper: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            welcome_banner_ms: 2_000,
            clock_tick_ms: 1_000,
            taskbar_height_px: 48,
            menu_exclusion: MenuExclusion::Global,
            backgrounds: DEFAULT_BACKGROUNDS.iter().map(|url| url.to_string()).collect(),
            default_window: WindowRect {
                x: 40,
                y: 48,
                ..WindowRect::default()
            },
            cascade_step_px: 20,
            folder_icon: DEFAULT_FOLDER_ICON.to_string(),
            shutdown_notice_ms: 2_000,
            unlock_pin: "saba".to_string(),
            lock_wallpaper: DEFAULT_LOCK_WALLPAPER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Decodes and validates a JSON config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`] when a
    /// value cannot drive the shell (no backgrounds, zero-length timers).
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.backgrounds.is_empty() {
            return Err(ConfigError::Invalid("at least one background is required"));
        }
        if self.backgrounds.len() > usize::from(u8::MAX) {
            return Err(ConfigError::Invalid("too many backgrounds"));
        }
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::Invalid("clock_tick_ms must be positive"));
        }
        if self.unlock_pin.is_empty() {
            return Err(ConfigError::Invalid("unlock_pin must not be empty"));
        }
        if self.taskbar_height_px < 0 {
            return Err(ConfigError::Invalid("taskbar_height_px must not be negative"));
        }
        Ok(())
    }

    /// Number of backgrounds the cycle counter wraps at.
    pub fn background_count(&self) -> u8 {
        u8::try_from(self.backgrounds.len()).unwrap_or(u8::MAX).max(1)
    }
}

/// Returns the build-time shell config, or the defaults when the embedded document is rejected.
pub fn load_shell_config() -> &'static ShellConfig {
    static CONFIG: OnceLock<ShellConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match ShellConfig::from_json(SHELL_CONFIG_JSON) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("shell config rejected, using defaults: {err}");
            ShellConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let config = ShellConfig::from_json(r#"{ "welcome_banner_ms": 500 }"#).unwrap();
        assert_eq!(config.welcome_banner_ms, 500);
        assert_eq!(config.clock_tick_ms, 1_000);
        assert_eq!(config.background_count(), 4);
        assert_eq!(config.menu_exclusion, MenuExclusion::Global);
    }

    #[test]
    fn per_site_menu_exclusion_is_accepted() {
        let config = ShellConfig::from_json(r#"{ "menu_exclusion": "per-site" }"#).unwrap();
        assert_eq!(config.menu_exclusion, MenuExclusion::PerSite);
    }

    #[test]
    fn empty_background_list_is_rejected() {
        let err = ShellConfig::from_json(r#"{ "backgrounds": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_unlock_pin_is_rejected() {
        let err = ShellConfig::from_json(r#"{ "unlock_pin": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ShellConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn embedded_config_loads() {
        let config = load_shell_config();
        assert!(!config.backgrounds.is_empty());
        assert!(config.clock_tick_ms > 0);
    }
}
