//! Grid configuration.
//!
//! Everything is defaulted so an empty JSON object (`{}`) is a valid
//! configuration. Values are injected at construction; nothing here sniffs
//! the runtime environment.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Height correction for the legacy layout engine that grew each row by its
/// cell borders. Pass it as `extraHeight` only when targeting that engine.
pub const LEGACY_EXTRA_HEIGHT: i32 = -2;

/// Default row height in CSS pixels
pub const DEFAULT_ROW_HEIGHT: u32 = 27;

/// How cell values containing delimiters are written to the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EscapeStrategy {
    /// Values are written verbatim; embedded delimiters corrupt the grid shape.
    #[default]
    None,
    /// Values containing a delimiter or a quote are wrapped in quotes with
    /// internal quotes doubled (spreadsheet-application TSV).
    Quote,
}

/// How pasted data is expanded to fill the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TilingMode {
    /// Expand an axis only when the target extent is an exact multiple of the data extent.
    #[default]
    ExactMultiple,
    /// Repeat whole blocks `floor(target / source)` times, leaving any remainder unfilled.
    WholeRepeats,
}

/// Clipboard text format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipboardFormat {
    pub row_delimiter: String,
    pub column_delimiter: String,
    pub escape: EscapeStrategy,
    pub tiling: TilingMode,
}

impl Default for ClipboardFormat {
    fn default() -> Self {
        Self {
            row_delimiter: "\n".to_string(),
            column_delimiter: "\t".to_string(),
            escape: EscapeStrategy::None,
            tiling: TilingMode::ExactMultiple,
        }
    }
}

/// Top-level grid configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Row height in CSS pixels
    pub row_height: u32,
    /// Added to `row_height` for every rendered row (see [`LEGACY_EXTRA_HEIGHT`])
    pub extra_height: i32,
    pub clipboard: ClipboardFormat,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            extra_height: 0,
            clipboard: ClipboardFormat::default(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.row_height == 0 {
            return Err(GridError::Config("rowHeight must be positive".into()));
        }
        let fmt = &self.clipboard;
        if fmt.row_delimiter.is_empty() || fmt.column_delimiter.is_empty() {
            return Err(GridError::Config("clipboard delimiters must not be empty".into()));
        }
        if fmt.row_delimiter == fmt.column_delimiter {
            return Err(GridError::Config(
                "row and column delimiters must differ".into(),
            ));
        }
        if fmt.escape == EscapeStrategy::Quote
            && (fmt.row_delimiter.contains('"') || fmt.column_delimiter.contains('"'))
        {
            return Err(GridError::Config(
                "quote escaping cannot be combined with a quote delimiter".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(GridConfig::from_json("{}").unwrap(), GridConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            GridConfig::from_json(r#"{"extraHeight": -2, "clipboard": {"escape": "quote"}}"#)
                .unwrap();
        assert_eq!(config.extra_height, LEGACY_EXTRA_HEIGHT);
        assert_eq!(config.clipboard.escape, EscapeStrategy::Quote);
        assert_eq!(config.clipboard.column_delimiter, "\t");
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_rejects_identical_delimiters() {
        let err = GridConfig::from_json(
            r#"{"clipboard": {"rowDelimiter": ",", "columnDelimiter": ","}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_row_height() {
        assert!(GridConfig::from_json(r#"{"rowHeight": 0}"#).is_err());
    }
}
