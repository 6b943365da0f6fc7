use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Tunables for the page behaviours. Every field falls back to its default
/// when omitted from the embedded JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Local storage key holding the theme preference
    pub storage_key: String,
    /// Fixed navbar height subtracted from smooth-scroll targets
    pub header_offset: f64,
    /// Added to scrollY before matching a section
    pub scroll_spy_offset: f64,
    /// Navbar gets the "scrolled" class past this scrollY
    pub navbar_scrolled_threshold: f64,
    pub typing_start_delay_ms: u32,
    pub typing_interval_ms: u32,
    pub cursor_hide_delay_ms: u32,
    pub filter_wiring_delay_ms: u32,
    pub layout_settle_delay_ms: u32,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Bottom inset of the reveal viewport, in px
    pub reveal_bottom_margin: u32,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            header_offset: 60.0,
            scroll_spy_offset: 100.0,
            navbar_scrolled_threshold: 50.0,
            typing_start_delay_ms: 1000,
            typing_interval_ms: 80,
            cursor_hide_delay_ms: 1000,
            filter_wiring_delay_ms: 500,
            layout_settle_delay_ms: 600,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PageError::InvalidConfig(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::InvalidConfig(format!(
                "reveal_threshold {} must be within 0..=1",
                self.reveal_threshold
            )));
        }
        if self.layout_settle_delay_ms < self.filter_wiring_delay_ms {
            return Err(PageError::InvalidConfig(format!(
                "layout settle ({}ms) must not run before filter wiring ({}ms)",
                self.layout_settle_delay_ms, self.filter_wiring_delay_ms
            )));
        }
        if !matches!(
            self.log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(PageError::InvalidConfig(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// IntersectionObserver root margin string for the reveal animation.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }
}
