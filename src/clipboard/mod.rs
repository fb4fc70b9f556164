//! Copy and paste of rectangular cell ranges.
//!
//! The controller reacts to one inbound event, [`ClipboardEvent`], carrying
//! either a `copy` or a `paste` intent:
//! - copy serializes the selection, or the focused cell when nothing is
//!   selected, and keeps the result as the controller's current text
//! - paste decodes the incoming text and tiles it to the selection extent;
//!   writing the result into the data model is left to the caller

pub mod format;
pub mod tile;

use serde::{Deserialize, Serialize};

use crate::config::ClipboardFormat;
use crate::error::{GridError, Result};
use crate::model::Models;
use crate::types::FocusedCell;

pub use tile::{tile, tile_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardCommand {
    Copy,
    Paste,
}

/// Clipboard intent: `{ "command": "copy" | "paste", "text"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEvent {
    pub command: ClipboardCommand,
    /// Pasted text; only meaningful for `paste`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ClipboardEvent {
    pub fn copy() -> Self {
        Self {
            command: ClipboardCommand::Copy,
            text: None,
        }
    }

    pub fn paste(text: impl Into<String>) -> Self {
        Self {
            command: ClipboardCommand::Paste,
            text: Some(text.into()),
        }
    }
}

/// Where tiled paste data starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PasteOrigin {
    /// Top-left corner of the selection (row and column indices)
    Range { row: u32, col: u32 },
    /// The focused cell, used when nothing is selected
    Focus(FocusedCell),
}

/// Tiled data ready to be written by the data model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteData {
    pub origin: PasteOrigin,
    pub data: Vec<Vec<String>>,
}

impl PasteData {
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }
}

/// Result of handling a [`ClipboardEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ClipboardOutcome {
    Copy { text: String },
    Paste(PasteData),
}

/// Copy/paste state machine
#[derive(Debug, Default)]
pub struct ClipboardController {
    text: String,
    format: ClipboardFormat,
}

impl ClipboardController {
    pub fn new(format: ClipboardFormat) -> Self {
        Self {
            text: String::new(),
            format,
        }
    }

    /// Text produced by the last copy.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &ClipboardFormat {
        &self.format
    }

    /// Dispatch an inbound clipboard event.
    pub fn handle(&mut self, event: &ClipboardEvent, models: &Models<'_>) -> Result<ClipboardOutcome> {
        tracing::debug!(command = ?event.command, "clipboard event");
        match event.command {
            ClipboardCommand::Copy => {
                let text = self.copy(models)?;
                Ok(ClipboardOutcome::Copy {
                    text: text.to_string(),
                })
            }
            ClipboardCommand::Paste => {
                let text = event.text.as_deref().unwrap_or_default();
                self.paste(text, models).map(ClipboardOutcome::Paste)
            }
        }
    }

    /// Serialize the selection, or the focused cell, into the current text.
    ///
    /// With a selection the text comes entirely from the selection model.
    /// Without one, exactly one of the render model (formatted value) or the
    /// data model (raw value) is read, depending on the column's copy options.
    ///
    /// Calling this with neither a selection nor a focused cell is a caller
    /// error and returns [`GridError::NoFocus`].
    pub fn copy(&mut self, models: &Models<'_>) -> Result<&str> {
        let text = if models.selection.has_selection() {
            models.selection.values_to_string()
        } else {
            let focus = models.focus.which().ok_or(GridError::NoFocus)?;
            focused_value(&focus, models)?
        };
        tracing::debug!(len = text.len(), "copy");
        self.text = text;
        Ok(&self.text)
    }

    /// Decode `text` and tile it to the destination extent.
    ///
    /// The destination is the selection; with no selection it is the 1x1
    /// extent of the focused cell, so the data is used as-is.
    pub fn paste(&self, text: &str, models: &Models<'_>) -> Result<PasteData> {
        let parsed = format::parse(text, &self.format);
        if parsed.is_empty() {
            return Err(GridError::EmptyPaste);
        }

        let selection = models
            .selection
            .has_selection()
            .then(|| models.selection.range())
            .flatten();
        let (origin, rows, cols) = match selection {
            Some(range) => {
                let (row, col) = range.origin();
                (PasteOrigin::Range { row, col }, range.row_count(), range.col_count())
            }
            None => {
                let focus = models.focus.which().ok_or(GridError::NoFocus)?;
                (PasteOrigin::Focus(focus), 1, 1)
            }
        };

        let data = tile_with(&parsed, rows, cols, self.format.tiling);
        tracing::debug!(
            source_rows = parsed.len(),
            source_cols = parsed.first().map_or(0, Vec::len),
            target_rows = rows,
            target_cols = cols,
            tiled = data.len() != parsed.len()
                || data.first().map(Vec::len) != parsed.first().map(Vec::len),
            "paste"
        );
        Ok(PasteData { origin, data })
    }
}

fn focused_value(focus: &FocusedCell, models: &Models<'_>) -> Result<String> {
    let column = focus.column_name.as_str();
    let options = models
        .columns
        .copy_options(column)
        .ok_or_else(|| GridError::UnknownColumn(column.to_string()))?;

    if options.use_formatted_value {
        return models
            .render
            .cell_data(&focus.row_key, column)
            .map(|cell| cell.formatted_value.clone())
            .ok_or_else(|| {
                tracing::warn!(row = %focus.row_key, column, "focused cell has no render data");
                GridError::RowNotFound(focus.row_key.to_string())
            });
    }

    let row = models
        .data
        .get(&focus.row_key)
        .ok_or_else(|| GridError::RowNotFound(focus.row_key.to_string()))?;
    if options.use_list_item_text {
        Ok(row.cell(column).map(|cell| cell.display_text()).unwrap_or_default())
    } else {
        Ok(row.value_string(column))
    }
}
