//! # Render Configuration
//!
//! Paper width and layout presets for a DANFCE render.
//!
//! | Paper | Font | Columns |
//! |-------|------|---------|
//! | 80mm | A | 48 |
//! | 80mm | B | 64 |
//! | 58mm | A | 32 |
//!
//! ## Usage
//!
//! ```
//! use danfce::config::{LayoutMode, RenderConfig};
//!
//! let config = RenderConfig::default().columns(32).layout(LayoutMode::Compact);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DanfceError, Result};
use crate::ir::Font;
use crate::logo::Logo;

/// Default closing line printed under the last rule.
pub const DEFAULT_FOOTER: &str = "GCWeb - Em suas mãos, um mundo de possibilidades";

/// Font and line spacing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Normal,
    Compact,
}

impl LayoutMode {
    /// Base font selected before the header.
    pub fn font(self) -> Font {
        match self {
            LayoutMode::Normal => Font::B,
            LayoutMode::Compact => Font::C,
        }
    }

    /// Line spacing (dots) applied after the header.
    pub fn line_spacing(self) -> u8 {
        match self {
            LayoutMode::Normal => 20,
            LayoutMode::Compact => 16,
        }
    }
}

/// Render settings.
///
/// `second_copy` marks a reprint for the caller's bookkeeping; it does not
/// change the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Characters per line.
    pub columns: usize,
    pub second_copy: bool,
    pub layout: LayoutMode,
    pub footer: String,
    /// Emitter logo, printed at the top of the header when present.
    #[serde(skip)]
    pub logo: Option<Logo>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 48,
            second_copy: false,
            layout: LayoutMode::Normal,
            footer: DEFAULT_FOOTER.to_string(),
            logo: None,
        }
    }
}

impl RenderConfig {
    /// Narrowest supported line (58mm paper).
    pub const MIN_COLUMNS: usize = 32;

    /// Parse a JSON config; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)
            .map_err(|e| DanfceError::InvalidConfig(format!("config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the characters per line.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Select the layout preset.
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Mark this render as a reprint.
    pub fn second_copy(mut self, second_copy: bool) -> Self {
        self.second_copy = second_copy;
        self
    }

    /// Attach the emitter logo.
    pub fn logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Replace the footer line.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Check that the column budget can hold the item table.
    pub fn validate(&self) -> Result<()> {
        if self.columns < Self::MIN_COLUMNS {
            return Err(DanfceError::InvalidConfig(format!(
                "columns must be at least {}, got {}",
                Self::MIN_COLUMNS,
                self.columns
            )));
        }
        Ok(())
    }

    /// Width of the right-hand value column in two-column rows.
    pub fn value_width(&self) -> usize {
        (self.columns / 3).max(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.columns, 48);
        assert!(!config.second_copy);
        assert_eq!(config.layout, LayoutMode::Normal);
        assert_eq!(config.value_width(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_presets() {
        assert_eq!(LayoutMode::Normal.font(), Font::B);
        assert_eq!(LayoutMode::Normal.line_spacing(), 20);
        assert_eq!(LayoutMode::Compact.font(), Font::C);
        assert_eq!(LayoutMode::Compact.line_spacing(), 16);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RenderConfig::from_json(r#"{"columns": 40, "layout": "compact"}"#).unwrap();
        assert_eq!(config.columns, 40);
        assert_eq!(config.layout, LayoutMode::Compact);
        assert_eq!(config.footer, DEFAULT_FOOTER);
    }

    #[test]
    fn test_too_narrow_is_rejected() {
        assert!(matches!(
            RenderConfig::default().columns(20).validate(),
            Err(DanfceError::InvalidConfig(_))
        ));
        assert!(RenderConfig::from_json(r#"{"columns": 10}"#).is_err());
        assert!(RenderConfig::from_json("not json").is_err());
    }
}
