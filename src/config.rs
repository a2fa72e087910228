//! Runtime tuning knobs for the page enhancements.
//!
//! Defaults match the shipped stylesheet timings. A page may override any
//! subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">{"typing_speed_ms": 30}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PortfolioError;

/// Id of the optional inline JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delay between typed characters.
    pub typing_speed_ms: u32,
    /// Delay before the first typed character.
    pub typing_delay_ms: u32,
    /// Visible fraction at which a section becomes the active nav target.
    pub scroll_threshold: f64,
    /// Visible fraction at which a content section is revealed.
    pub reveal_threshold: f64,
    /// localStorage key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_speed_ms: 50,
            typing_delay_ms: 500,
            scroll_threshold: 0.4,
            reveal_threshold: 0.15,
            theme_storage_key: "theme".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse a JSON override, validating thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] for malformed JSON, unknown fields,
    /// or thresholds outside `0.0..=1.0`.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PortfolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional override, falling back to defaults with a warning.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        for (name, value) in [
            ("scroll_threshold", self.scroll_threshold),
            ("reveal_threshold", self.reveal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PortfolioError::Config(format!("{name} must be within 0.0..=1.0, got {value}")));
            }
        }
        if self.theme_storage_key.is_empty() {
            return Err(PortfolioError::Config("theme_storage_key must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Log filter for `console_log`, with unrecognized names treated as `info`.
    pub fn level_filter(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the inline override block from the current document.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_optional_json(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
