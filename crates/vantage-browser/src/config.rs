//! Browser screen configuration: starting page, animation timings and
//! user-facing strings.

use std::path::Path;

use serde::Deserialize;
use url::Url;
use vantage_types::error::{Result, VantageError};

/// Page loaded when the screen first becomes ready.
pub const DEFAULT_STARTING_URL: &str = "https://www.google.com";

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserStrings {
    /// Placeholder shown in the empty search field.
    pub search_placeholder: String,
    /// Title of the alert shown for navigation failures.
    pub general_error_title: String,
    /// Label of the alert's only button.
    pub acknowledge: String,
}

impl Default for BrowserStrings {
    fn default() -> Self {
        Self {
            search_placeholder: "Search or enter website name".to_string(),
            general_error_title: "Error".to_string(),
            acknowledge: "OK".to_string(),
        }
    }
}

/// Configuration for one browser screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub starting_url: String,

    // Progress bar timings
    pub progress_fade_in_ms: u32,
    /// How long a completed bar stays visible before fading.
    pub progress_fade_out_delay_ms: u32,
    pub progress_fade_out_ms: u32,

    /// Slide duration when the chrome bars hide or show.
    pub bar_slide_ms: u32,

    pub strings: BrowserStrings,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            starting_url: DEFAULT_STARTING_URL.to_string(),
            progress_fade_in_ms: 100,
            progress_fade_out_delay_ms: 700,
            progress_fade_out_ms: 300,
            bar_slide_ms: 200,
            strings: BrowserStrings::default(),
        }
    }
}

impl BrowserConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded browser config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the screen cannot start with.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.starting_url).map_err(|e| {
            VantageError::Config(format!("starting_url '{}': {e}", self.starting_url))
        })?;
        Ok(())
    }

    /// Total time a finished load keeps the progress bar on screen.
    pub fn progress_hide_total_ms(&self) -> u32 {
        self.progress_fade_out_delay_ms + self.progress_fade_out_ms
    }
}
