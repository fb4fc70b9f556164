//! Row renderer.
//!
//! Produces the markup of a whole row by delegating each main cell to the
//! renderer of its edit type, and applies partial model changes to an already
//! rendered row by patching only the changed cells.

use crate::config::GridConfig;
use crate::model::{ColumnModel, Models};
use crate::types::{CellData, EditType, Row, EXTRA_DATA, ROW_NUMBER_COLUMN};

use super::factory::CellRendererFactory;
use super::markup::row_template;
use super::target::CellTarget;

/// Effective edit type of a cell.
///
/// Starts from the column's configured type; a cell that is not editable is
/// forced to [`EditType::Normal`] unless it belongs to the row-number column,
/// which always keeps its configured type. Returns `None` for columns without
/// configuration.
pub fn resolve_edit_type(
    columns: &dyn ColumnModel,
    column_name: &str,
    cell: &CellData,
) -> Option<EditType> {
    let configured = columns.edit_type(column_name)?;
    if !cell.is_editable && column_name != ROW_NUMBER_COLUMN {
        return Some(EditType::Normal);
    }
    Some(configured)
}

/// Renders and patches rows for an ordered list of columns.
pub struct RowRenderer {
    column_names: Vec<String>,
    extra_height: i32,
    factory: CellRendererFactory,
}

impl RowRenderer {
    pub fn new(column_names: Vec<String>, config: &GridConfig) -> Self {
        Self::with_factory(column_names, config, CellRendererFactory::default())
    }

    pub fn with_factory(
        column_names: Vec<String>,
        config: &GridConfig,
        factory: CellRendererFactory,
    ) -> Self {
        Self {
            column_names,
            extra_height: config.extra_height,
            factory,
        }
    }

    pub fn set_column_names(&mut self, column_names: Vec<String>) {
        self.column_names = column_names;
    }

    pub fn factory_mut(&mut self) -> &mut CellRendererFactory {
        &mut self.factory
    }

    /// Markup of the whole row; empty for a row without a key.
    pub fn render(&self, row: &Row, models: &Models<'_>) -> String {
        let Some(key) = row.key.as_ref() else {
            return String::new();
        };

        let mut contents = String::new();
        let mut cell_count = 0usize;
        for column_name in &self.column_names {
            let Some(cell) = row.cell(column_name) else {
                continue;
            };
            if !cell.is_main_row {
                continue;
            }
            let Some(edit_type) = resolve_edit_type(models.columns, column_name, cell) else {
                continue;
            };
            tracing::trace!(row = %key, column = %column_name, %edit_type, "render cell");
            contents.push_str(&self.factory.get_instance(&edit_type).render(cell));
            cell_count += 1;
        }

        tracing::debug!(row = %key, cells = cell_count, "render row");
        row_template(&key.to_string(), "", self.row_height(models), &contents)
    }

    /// Patch the cells listed in the row's change delta on `target`.
    ///
    /// Cells whose editable or disabled state changed may resolve to a
    /// different renderer than the one that drew them, so they are rewritten
    /// in full. Columns outside the delta and the row container are left
    /// untouched. Returns the number of cells patched.
    pub fn on_update(&self, row: &Row, target: &mut dyn CellTarget, models: &Models<'_>) -> usize {
        let mut patched = 0usize;
        for column_name in &row.changed {
            if column_name == EXTRA_DATA {
                continue;
            }
            let Some(cell) = row.cell(column_name) else {
                continue;
            };
            let Some(edit_type) = resolve_edit_type(models.columns, column_name, cell) else {
                continue;
            };
            let renderer = self.factory.get_instance(&edit_type);
            if row.is_restyled(column_name) {
                renderer.replace(cell, target);
            } else {
                renderer.update(cell, target);
            }
            patched += 1;
        }
        if let Some(key) = row.key.as_ref() {
            tracing::debug!(row = %key, changed = ?row.changed, patched, "update row");
        }
        patched
    }

    fn row_height(&self, models: &Models<'_>) -> i64 {
        let height = i64::from(models.dimension.row_height()) + i64::from(self.extra_height);
        height.max(0)
    }
}
