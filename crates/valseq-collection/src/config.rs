//! Configuration for textual conversion

use crate::SequenceError;
use serde::{Deserialize, Serialize};

/// Layout of the rendered element list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Single line, no whitespace between elements
    Compact,
    /// One element per line, indented by `indent_width` spaces
    Pretty,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::Compact
    }
}

/// Largest accepted indent for pretty rendering
pub const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for `to_string`/`to_locale_string`
///
/// # Examples
///
/// ```
/// use valseq_collection::{RenderConfig, RenderStyle};
///
/// let config = RenderConfig::from_toml("style = \"pretty\"\nindent_width = 4").unwrap();
/// assert_eq!(config.style, RenderStyle::Pretty);
/// assert_eq!(config.indent_width, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Compact or pretty layout
    #[serde(default)]
    pub style: RenderStyle,

    /// Spaces per indent level (pretty layout only)
    /// Default: 2
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_indent_width() -> usize {
    2
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::compact()
    }
}

impl RenderConfig {
    /// Single-line rendering, used by `to_string`
    pub fn compact() -> Self {
        Self {
            style: RenderStyle::Compact,
            indent_width: default_indent_width(),
        }
    }

    /// Multi-line rendering with the given indent
    pub fn pretty(indent_width: usize) -> Self {
        Self {
            style: RenderStyle::Pretty,
            indent_width,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.style == RenderStyle::Pretty
            && (self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH)
        {
            return Err(SequenceError::Config(format!(
                "indent_width must be in 1..={}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SequenceError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SequenceError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, SequenceError> {
        toml::to_string_pretty(self)
            .map_err(|e| SequenceError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
