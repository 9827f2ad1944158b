use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FADE_DELAY_MS: u64 = 300;
pub const DEFAULT_SCROLL_HINT_DELAY_MS: u64 = 100;
pub const DEFAULT_CAROUSEL_SPEED_MS: u64 = 600;
pub const DEFAULT_PAGE_TITLE: &str = "Wrapped";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WrappedConfig {
    /// Settle delay between fading out a page and swapping in the next one.
    #[serde(default)]
    pub fade_delay_ms: Option<u64>,
    /// Delay before the scroll hint is attached to the first slide.
    #[serde(default)]
    pub scroll_hint_delay_ms: Option<u64>,
    #[serde(default)]
    pub carousel_speed_ms: Option<u64>,
    #[serde(default)]
    pub page_title: Option<String>,
}

impl WrappedConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/wrapped/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("wrapped/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("wrapped\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS))
    }

    pub fn effective_scroll_hint_delay(&self) -> Duration {
        Duration::from_millis(
            self.scroll_hint_delay_ms
                .unwrap_or(DEFAULT_SCROLL_HINT_DELAY_MS),
        )
    }

    pub fn effective_carousel_speed_ms(&self) -> u64 {
        self.carousel_speed_ms.unwrap_or(DEFAULT_CAROUSEL_SPEED_MS)
    }

    pub fn effective_page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }
}
