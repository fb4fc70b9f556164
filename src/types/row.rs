use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::CellData;

/// Delta entry recorded when a row's extra data changes. Never rendered as a cell.
pub const EXTRA_DATA: &str = "_extraData";

/// Unique row identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Index(u32),
    Name(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<u32> for RowKey {
    fn from(i: u32) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for RowKey {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for RowKey {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

/// A row entity: cell data by column name plus the delta of the last update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// `None` for placeholder rows that have not been initialized yet
    pub key: Option<RowKey>,
    #[serde(default)]
    pub cells: HashMap<String, CellData>,
    /// Row-level state (class names, check state, ...)
    #[serde(default)]
    pub extra_data: serde_json::Value,
    /// Column names (or [`EXTRA_DATA`]) touched by the most recent update, in order.
    #[serde(default, skip_serializing)]
    pub changed: Vec<String>,
    /// Subset of `changed` whose editable or disabled state changed; these
    /// cells may switch renderer and must be rewritten in full.
    #[serde(default, skip_serializing)]
    pub restyled: Vec<String>,
}

impl Row {
    pub fn new(key: impl Into<RowKey>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// A row without a key, as produced for not-yet-loaded slots.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn cell(&self, column_name: &str) -> Option<&CellData> {
        self.cells.get(column_name)
    }

    /// Insert a cell without recording a change (initial load).
    pub fn with_cell(mut self, cell: CellData) -> Self {
        self.cells.insert(cell.column_name.clone(), cell);
        self
    }

    /// Replace a cell and record the column in the change delta.
    pub fn set_cell(&mut self, cell: CellData) {
        let column = cell.column_name.clone();
        self.cells.insert(column.clone(), cell);
        self.mark_changed(column);
    }

    /// Replace a cell whose editable or disabled state may differ from the
    /// previous one, recording it in both deltas.
    pub fn set_cell_state(&mut self, cell: CellData) {
        let column = cell.column_name.clone();
        if !self.restyled.contains(&column) {
            self.restyled.push(column.clone());
        }
        self.set_cell(cell);
    }

    /// Whether the column's cell must be rewritten rather than patched.
    pub fn is_restyled(&self, column_name: &str) -> bool {
        self.restyled.iter().any(|c| c == column_name)
    }

    /// Replace the extra data and record [`EXTRA_DATA`] in the change delta.
    pub fn set_extra_data(&mut self, data: serde_json::Value) {
        self.extra_data = data;
        self.mark_changed(EXTRA_DATA.to_string());
    }

    fn mark_changed(&mut self, entry: String) {
        if !self.changed.contains(&entry) {
            self.changed.push(entry);
        }
    }

    /// Drain the change delta once it has been rendered.
    pub fn take_changes(&mut self) -> Vec<String> {
        self.restyled.clear();
        std::mem::take(&mut self.changed)
    }

    /// The raw value of a column as a string; empty for unknown columns.
    pub fn value_string(&self, column_name: &str) -> String {
        self.cells
            .get(column_name)
            .map(|cell| cell.value.to_string())
            .unwrap_or_default()
    }
}
