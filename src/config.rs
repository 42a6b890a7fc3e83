use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block a page can use
/// to override the defaults.
pub const CONFIG_ELEMENT_ID: &str = "enhance-config";

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

/// Selectors for every element the enhancements hook into.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub menu_toggle: String,
    pub menu_panel: String,
    pub anchors: String,
    pub staggered: String,
    pub reveal: Vec<String>,
    pub form_group: String,
    pub form_input: String,
    pub form_label: String,
    pub navbar: String,
    pub hero: String,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".hamburger".to_string(),
            menu_panel: ".nav-links".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            staggered: ".skill-card".to_string(),
            reveal: [
                ".section-title",
                ".project-card",
                ".about-text",
                ".contact-form",
                ".contact-info",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            form_group: ".form-group".to_string(),
            form_input: "input, textarea".to_string(),
            form_label: "label".to_string(),
            navbar: ".navbar".to_string(),
            hero: ".hero".to_string(),
            hero_title: ".hero h1".to_string(),
            hero_subtitle: ".hero p".to_string(),
        }
    }
}

/// Everything tunable about the page enhancements. Every field has a default,
/// so a page only needs to spell out what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhanceConfig {
    pub selectors: Selectors,
    /// Widths at or below this count as mobile for the anchor handler.
    pub mobile_breakpoint: f64,
    /// Height of the fixed header kept clear when scrolling to an anchor.
    pub header_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Seconds of transition delay added per staggered card.
    pub stagger_step: f64,
    pub title_interval_ms: u32,
    pub subtitle_interval_ms: u32,
    /// Gap between the title finishing and the subtitle starting.
    pub subtitle_pause_ms: u32,
    pub parallax_factor: f64,
    pub navbar_shadow: String,
    pub log_level: Option<String>,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            mobile_breakpoint: 768.0,
            header_offset: 80.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px".to_string(),
            stagger_step: 0.1,
            title_interval_ms: 100,
            subtitle_interval_ms: 50,
            subtitle_pause_ms: 200,
            parallax_factor: 0.5,
            navbar_shadow: "var(--shadow)".to_string(),
            log_level: None,
        }
    }
}

impl EnhanceConfig {
    /// Parses and validates a JSON override block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "revealThreshold",
                value: self.reveal_threshold,
            });
        }
        if !self.parallax_factor.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "parallaxFactor",
                value: self.parallax_factor,
            });
        }
        for (field, value) in [
            ("mobileBreakpoint", self.mobile_breakpoint),
            ("headerOffset", self.header_offset),
            ("staggerStep", self.stagger_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("titleIntervalMs", self.title_interval_ms),
            ("subtitleIntervalMs", self.subtitle_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: f64::from(value),
                });
            }
        }
        Ok(())
    }

    /// The configured log level, or the build default when unset or
    /// unrecognised.
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or_else(default_log_level)
    }
}
