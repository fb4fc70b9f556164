//! In-memory implementation of every collaborator model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clipboard::format;
use crate::config::{ClipboardFormat, GridConfig};
use crate::error::{GridError, Result};
use crate::types::{
    CellData, CellValue, ColumnDef, CopyOptions, EditType, FocusedCell, Row, RowKey, Selection,
    ROW_NUMBER_COLUMN,
};

use super::{ColumnModel, DataModel, DimensionModel, FocusModel, RenderModel, SelectionModel};

/// One row of input data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowInput {
    pub row_key: Option<RowKey>,
    #[serde(default)]
    pub values: HashMap<String, CellValue>,
    /// Columns whose cells are disabled (rendered read-only)
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Vertical merges: column name to number of rows the cell spans
    #[serde(default)]
    pub row_span: HashMap<String, u32>,
    #[serde(default)]
    pub extra_data: serde_json::Value,
}

/// Columns, rows, selection, focus and dimensions held in memory.
#[derive(Debug)]
pub struct GridStore {
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
    index: HashMap<RowKey, usize>,
    selection: Option<Selection>,
    focus: Option<FocusedCell>,
    row_height: u32,
    format: ClipboardFormat,
}

impl GridStore {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
            selection: None,
            focus: None,
            row_height: config.row_height,
            format: config.clipboard.clone(),
        }
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Replace the column definitions and rebuild every row's cells.
    pub fn set_columns(&mut self, columns: Vec<ColumnDef>) {
        self.columns = columns;
        let inputs: Vec<RowInput> = self.rows.iter().map(Self::to_input).collect();
        self.load_rows(inputs);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, key: &RowKey) -> Option<&Row> {
        self.index.get(key).and_then(|&idx| self.rows.get(idx))
    }

    fn row_mut(&mut self, key: &RowKey) -> Result<&mut Row> {
        let idx = *self
            .index
            .get(key)
            .ok_or_else(|| GridError::RowNotFound(key.to_string()))?;
        self.rows
            .get_mut(idx)
            .ok_or_else(|| GridError::RowNotFound(key.to_string()))
    }

    /// Replace all rows. Rows without a key are kept as placeholders.
    pub fn load_rows(&mut self, inputs: Vec<RowInput>) {
        // Cells covered by a row span above them are continuation instances.
        let mut covered: HashMap<String, u32> = HashMap::new();
        let mut rows = Vec::with_capacity(inputs.len());

        for (position, mut input) in inputs.into_iter().enumerate() {
            let Some(key) = input.row_key.take() else {
                // A placeholder still occupies a row of every span above it.
                for remaining in covered.values_mut() {
                    *remaining = remaining.saturating_sub(1);
                }
                rows.push(Row::placeholder());
                continue;
            };
            let mut row = Row::new(key.clone());
            row.extra_data = std::mem::take(&mut input.extra_data);

            for column in &self.columns {
                let remaining = covered.get(&column.name).copied().unwrap_or(0);
                let is_main_row = remaining == 0;
                if remaining > 0 {
                    covered.insert(column.name.clone(), remaining - 1);
                }

                let value = if column.name == ROW_NUMBER_COLUMN {
                    CellValue::Number(position_number(position))
                } else {
                    input.values.get(&column.name).cloned().unwrap_or_default()
                };
                let mut cell = self.build_cell(&key, column, value, &input.disabled);
                cell.is_main_row = is_main_row;
                if is_main_row {
                    let span = input.row_span.get(&column.name).copied().unwrap_or(1).max(1);
                    cell.row_span = span;
                    if span > 1 {
                        covered.insert(column.name.clone(), span - 1);
                    }
                }
                row = row.with_cell(cell);
            }
            rows.push(row);
        }

        self.index = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| row.key.clone().map(|key| (key, idx)))
            .collect();
        self.rows = rows;
        self.selection = self.selection.and_then(|s| self.clamp_selection(s));
    }

    /// Parse a JSON array of [`RowInput`] and load it.
    pub fn load_rows_json(&mut self, json: &str) -> Result<()> {
        let inputs: Vec<RowInput> = serde_json::from_str(json)?;
        self.load_rows(inputs);
        Ok(())
    }

    fn build_cell(
        &self,
        key: &RowKey,
        column: &ColumnDef,
        value: CellValue,
        disabled: &[String],
    ) -> CellData {
        let is_disabled = disabled.contains(&column.name);
        let mut cell = CellData::new(key.clone(), column.name.clone(), value);
        cell.is_disabled = is_disabled;
        cell.is_editable = column.editable && !is_disabled && column.name != ROW_NUMBER_COLUMN;
        if column.edit_type.is_list() {
            cell.list_items = column.list_items.clone();
            cell.formatted_value = cell.display_text();
        }
        cell
    }

    fn to_input(row: &Row) -> RowInput {
        RowInput {
            row_key: row.key.clone(),
            values: row
                .cells
                .iter()
                .filter(|(_, cell)| cell.is_main_row)
                .map(|(name, cell)| (name.clone(), cell.value.clone()))
                .collect(),
            disabled: row
                .cells
                .iter()
                .filter(|(_, cell)| cell.is_disabled)
                .map(|(name, _)| name.clone())
                .collect(),
            row_span: row
                .cells
                .iter()
                .filter(|(_, cell)| cell.row_span > 1)
                .map(|(name, cell)| (name.clone(), cell.row_span))
                .collect(),
            extra_data: row.extra_data.clone(),
        }
    }

    /// Set a cell value, recording the column in the row's change delta.
    pub fn set_value(&mut self, key: &RowKey, column_name: &str, value: CellValue) -> Result<()> {
        let column = self
            .column(column_name)
            .cloned()
            .ok_or_else(|| GridError::UnknownColumn(column_name.to_string()))?;
        let row = self.row_mut(key)?;
        let previous = row
            .cell(column_name)
            .cloned()
            .ok_or_else(|| GridError::UnknownColumn(column_name.to_string()))?;

        let mut cell = CellData {
            value,
            ..previous
        };
        cell.formatted_value = if column.edit_type.is_list() {
            cell.display_text()
        } else {
            cell.value.to_string()
        };
        row.set_cell(cell);
        Ok(())
    }

    /// Enable or disable a cell, recording the change.
    pub fn set_disabled(&mut self, key: &RowKey, column_name: &str, disabled: bool) -> Result<()> {
        let editable = self
            .column(column_name)
            .map(|c| c.editable && c.name != ROW_NUMBER_COLUMN)
            .ok_or_else(|| GridError::UnknownColumn(column_name.to_string()))?;
        let row = self.row_mut(key)?;
        let mut cell = row
            .cell(column_name)
            .cloned()
            .ok_or_else(|| GridError::UnknownColumn(column_name.to_string()))?;
        cell.is_disabled = disabled;
        cell.is_editable = editable && !disabled;
        row.set_cell_state(cell);
        Ok(())
    }

    pub fn set_extra_data(&mut self, key: &RowKey, data: serde_json::Value) -> Result<()> {
        self.row_mut(key)?.set_extra_data(data);
        Ok(())
    }

    /// Clear a row's change delta after it has been rendered.
    pub fn take_changes(&mut self, key: &RowKey) -> Vec<String> {
        self.row_mut(key)
            .map(Row::take_changes)
            .unwrap_or_default()
    }

    /// Set the selected range, clamped to the loaded rows and columns.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection.and_then(|s| self.clamp_selection(s));
    }

    /// Clip `selection` to the grid. A range whose top-left corner lies
    /// outside the grid is dropped.
    fn clamp_selection(&self, selection: Selection) -> Option<Selection> {
        let last_row = last_index(self.rows.len())?;
        let last_col = last_index(self.columns.len())?;
        let (min_row, min_col, max_row, max_col) = selection.bounds();
        if min_row > last_row || min_col > last_col {
            tracing::warn!(
                start_row = min_row,
                start_col = min_col,
                "selection outside the grid, dropped"
            );
            return None;
        }
        if max_row > last_row || max_col > last_col {
            tracing::debug!(max_row, max_col, last_row, last_col, "selection clamped");
        }
        Some(Selection::cell_range(
            min_row,
            min_col,
            max_row.min(last_row),
            max_col.min(last_col),
        ))
    }

    pub fn set_focus(&mut self, focus: Option<FocusedCell>) {
        self.focus = focus;
    }

    fn copy_value(&self, row: &Row, column: &ColumnDef) -> String {
        let Some(cell) = row.cell(&column.name) else {
            return String::new();
        };
        if column.copy_options.use_formatted_value {
            cell.formatted_value.clone()
        } else if column.copy_options.use_list_item_text {
            cell.display_text()
        } else {
            cell.value.to_string()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn last_index(len: usize) -> Option<u32> {
    len.checked_sub(1)
        .map(|last| u32::try_from(last).unwrap_or(u32::MAX))
}

fn position_number(position: usize) -> f64 {
    (position + 1) as f64
}

impl ColumnModel for GridStore {
    fn edit_type(&self, column_name: &str) -> Option<EditType> {
        self.column(column_name).map(|c| c.edit_type.clone())
    }

    fn copy_options(&self, column_name: &str) -> Option<CopyOptions> {
        self.column(column_name).map(|c| c.copy_options)
    }
}

impl DataModel for GridStore {
    fn get(&self, row_key: &RowKey) -> Option<&Row> {
        self.row(row_key)
    }
}

impl RenderModel for GridStore {
    fn cell_data(&self, row_key: &RowKey, column_name: &str) -> Option<&CellData> {
        self.row(row_key).and_then(|row| row.cell(column_name))
    }
}

impl SelectionModel for GridStore {
    fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn values_to_string(&self) -> String {
        let Some(selection) = self.selection else {
            return String::new();
        };
        let (min_row, min_col, max_row, max_col) = selection.bounds();
        let values: Vec<Vec<String>> = self
            .rows
            .iter()
            .skip(min_row as usize)
            .take((max_row - min_row) as usize + 1)
            .map(|row| {
                self.columns
                    .iter()
                    .skip(min_col as usize)
                    .take((max_col - min_col) as usize + 1)
                    .map(|column| self.copy_value(row, column))
                    .collect()
            })
            .collect();
        format::serialize(&values, &self.format)
    }

    fn range(&self) -> Option<Selection> {
        self.selection
    }
}

impl FocusModel for GridStore {
    fn which(&self) -> Option<FocusedCell> {
        self.focus.clone()
    }
}

impl DimensionModel for GridStore {
    fn row_height(&self) -> u32 {
        self.row_height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::ListItem;

    fn store() -> GridStore {
        let mut store = GridStore::new(&GridConfig::default());
        store.set_columns(vec![
            ColumnDef::new(ROW_NUMBER_COLUMN, EditType::Normal),
            ColumnDef::new("name", EditType::Text),
            ColumnDef::new("kind", EditType::Select).with_list_items(vec![ListItem {
                text: "Fruit".into(),
                value: "f".into(),
            }]),
        ]);
        store
            .load_rows_json(
                r#"[
                    {"rowKey": 10, "values": {"name": "apple", "kind": "f"}, "rowSpan": {"kind": 2}},
                    {"rowKey": 11, "values": {"name": "pear"}},
                    {"rowKey": 12, "values": {"name": "plum", "kind": "f"}, "disabled": ["name"]}
                ]"#,
            )
            .unwrap();
        store
    }

    #[test]
    fn test_row_number_cells_are_synthesized() {
        let store = store();
        let cell = store.cell_data(&RowKey::from(11), ROW_NUMBER_COLUMN).unwrap();
        assert_eq!(cell.formatted_value, "2");
        assert!(!cell.is_editable);
    }

    #[test]
    fn test_row_span_marks_continuation_cells() {
        let store = store();
        let main = store.cell_data(&RowKey::from(10), "kind").unwrap();
        assert!(main.is_main_row);
        assert_eq!(main.row_span, 2);
        assert!(!store.cell_data(&RowKey::from(11), "kind").unwrap().is_main_row);
        assert!(store.cell_data(&RowKey::from(12), "kind").unwrap().is_main_row);
    }

    #[test]
    fn test_list_cells_format_item_text() {
        let store = store();
        assert_eq!(
            store.cell_data(&RowKey::from(10), "kind").unwrap().formatted_value,
            "Fruit"
        );
    }

    #[test]
    fn test_disabled_cells_are_not_editable() {
        let store = store();
        let cell = store.cell_data(&RowKey::from(12), "name").unwrap();
        assert!(cell.is_disabled);
        assert!(!cell.is_editable);
    }

    #[test]
    fn test_set_value_records_change() {
        let mut store = store();
        let key = RowKey::from(11);
        store.set_value(&key, "name", "quince".into()).unwrap();
        assert_eq!(store.get(&key).unwrap().changed, vec!["name".to_string()]);
        assert_eq!(store.take_changes(&key), vec!["name".to_string()]);
        assert!(store.get(&key).unwrap().changed.is_empty());
    }

    #[test]
    fn test_set_value_unknown_row_or_column() {
        let mut store = store();
        assert!(matches!(
            store.set_value(&RowKey::from(99), "name", "x".into()),
            Err(GridError::RowNotFound(_))
        ));
        assert!(matches!(
            store.set_value(&RowKey::from(10), "nope", "x".into()),
            Err(GridError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_values_to_string_over_selection() {
        let mut store = store();
        store.set_selection(Some(Selection::cell_range(0, 1, 1, 2)));
        assert_eq!(store.values_to_string(), "apple\tf\npear\t");
    }

    #[test]
    fn test_values_to_string_honors_formatted_option() {
        let mut store = store();
        let mut columns = store.columns().to_vec();
        columns[2].copy_options.use_formatted_value = true;
        store.set_columns(columns);
        store.set_selection(Some(Selection::cell_range(0, 2, 0, 2)));
        assert_eq!(store.values_to_string(), "Fruit");
    }

    #[test]
    fn test_row_span_counts_placeholder_rows() {
        let mut store = store();
        store
            .load_rows_json(
                r#"[
                    {"rowKey": 1, "values": {"kind": "f"}, "rowSpan": {"kind": 2}},
                    {"values": {}},
                    {"rowKey": 3, "values": {"kind": "f"}}
                ]"#,
            )
            .unwrap();
        let cell = store.cell_data(&RowKey::from(3), "kind").unwrap();
        assert!(cell.is_main_row);
        assert_eq!(cell.formatted_value, "Fruit");
    }

    #[test]
    fn test_selection_is_clamped_to_grid() {
        let mut store = store();
        store.set_selection(Some(Selection::cell_range(1, 1, 999, 50)));
        assert_eq!(store.range(), Some(Selection::cell_range(1, 1, 2, 2)));
        assert_eq!(store.values_to_string(), "pear\t\nplum\tf");

        store.set_selection(Some(Selection::cell_range(5, 0, 7, 1)));
        assert_eq!(store.range(), None);
        assert!(!store.has_selection());
    }

    #[test]
    fn test_reload_shrinks_selection() {
        let mut store = store();
        store.set_selection(Some(Selection::cell_range(0, 0, 2, 2)));
        store
            .load_rows_json(r#"[{"rowKey": 1, "values": {"name": "fig"}}]"#)
            .unwrap();
        assert_eq!(store.range(), Some(Selection::cell_range(0, 0, 0, 2)));
    }

    #[test]
    fn test_set_columns_keeps_data() {
        let mut store = store();
        let columns = store.columns().to_vec();
        store.set_columns(columns);
        assert_eq!(store.get(&RowKey::from(10)).unwrap().value_string("name"), "apple");
        assert_eq!(store.rows().len(), 3);
    }
}
