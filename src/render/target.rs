//! Live row elements that cell renderers patch in place.

use std::collections::BTreeMap;

use crate::types::RowKey;

/// A rendered row that can be patched cell by cell.
///
/// Cells are addressed by column name. Implementations must leave the row
/// container itself untouched and ignore columns they do not contain.
pub trait CellTarget {
    /// Replace the inner markup of a cell.
    fn set_content(&mut self, column_name: &str, markup: &str);
    /// Set an attribute on the cell element.
    fn set_attribute(&mut self, column_name: &str, name: &str, value: &str);
    /// Set the value of the form control (input or select) inside a cell
    /// without recreating it, so an active editor keeps focus.
    fn set_control_value(&mut self, column_name: &str, value: &str);
}

/// One patch applied to a [`RenderedRow`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOp {
    Content { column: String },
    Attribute { column: String, name: String },
    ControlValue { column: String },
}

impl PatchOp {
    pub fn column(&self) -> &str {
        match self {
            Self::Content { column }
            | Self::Attribute { column, .. }
            | Self::ControlValue { column } => column,
        }
    }
}

/// State of one cell in a [`RenderedRow`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCell {
    pub attributes: BTreeMap<String, String>,
    pub content: String,
    pub control_value: Option<String>,
}

/// Headless row element.
///
/// Used outside the browser (tests, server-side rendering of updates): keeps
/// the patched state of each cell and a log of every operation applied.
#[derive(Debug, Clone)]
pub struct RenderedRow {
    key: RowKey,
    cells: BTreeMap<String, RenderedCell>,
    ops: Vec<PatchOp>,
}

impl RenderedRow {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            cells: BTreeMap::new(),
            ops: Vec::new(),
        }
    }

    pub fn key(&self) -> &RowKey {
        &self.key
    }

    pub fn cell(&self, column_name: &str) -> Option<&RenderedCell> {
        self.cells.get(column_name)
    }

    /// Every patch applied so far, in order.
    pub fn operations(&self) -> &[PatchOp] {
        &self.ops
    }

    /// Distinct patched columns in first-touch order.
    pub fn patched_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for op in &self.ops {
            if !columns.contains(&op.column()) {
                columns.push(op.column());
            }
        }
        columns
    }

    pub fn clear_operations(&mut self) {
        self.ops.clear();
    }

    fn cell_mut(&mut self, column_name: &str) -> &mut RenderedCell {
        self.cells.entry(column_name.to_string()).or_default()
    }
}

impl CellTarget for RenderedRow {
    fn set_content(&mut self, column_name: &str, markup: &str) {
        self.cell_mut(column_name).content = markup.to_string();
        self.ops.push(PatchOp::Content {
            column: column_name.to_string(),
        });
    }

    fn set_attribute(&mut self, column_name: &str, name: &str, value: &str) {
        self.cell_mut(column_name)
            .attributes
            .insert(name.to_string(), value.to_string());
        self.ops.push(PatchOp::Attribute {
            column: column_name.to_string(),
            name: name.to_string(),
        });
    }

    fn set_control_value(&mut self, column_name: &str, value: &str) {
        self.cell_mut(column_name).control_value = Some(value.to_string());
        self.ops.push(PatchOp::ControlValue {
            column: column_name.to_string(),
        });
    }
}
