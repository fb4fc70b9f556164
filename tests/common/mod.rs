//! Common test utilities: grid builders and counting model doubles.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::Cell;
use std::collections::HashMap;

use gridview::config::GridConfig;
use gridview::model::{
    ColumnModel, DataModel, DimensionModel, FocusModel, GridStore, RenderModel, RowInput,
    SelectionModel,
};
use gridview::types::{
    CellData, CellValue, ColumnDef, CopyOptions, EditType, FocusedCell, ListItem, Row, RowKey,
    Selection, ROW_NUMBER_COLUMN,
};

// ============================================================================
// Grid builders
// ============================================================================

pub fn list_items() -> Vec<ListItem> {
    vec![
        ListItem {
            text: "Apple".into(),
            value: "a".into(),
        },
        ListItem {
            text: "Banana".into(),
            value: "b".into(),
        },
    ]
}

/// `_number`, `name` (text), `fruit` (select), `tags` (checkbox), `note` (read-only)
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new(ROW_NUMBER_COLUMN, EditType::Normal),
        ColumnDef::new("name", EditType::Text),
        ColumnDef::new("fruit", EditType::Select).with_list_items(list_items()),
        ColumnDef::new("tags", EditType::Checkbox).with_list_items(list_items()),
        ColumnDef::new("note", EditType::Normal).read_only(),
    ]
}

pub fn row_input(key: u32, name: &str, fruit: &str) -> RowInput {
    RowInput {
        row_key: Some(RowKey::from(key)),
        values: HashMap::from([
            ("name".to_string(), CellValue::from(name)),
            ("fruit".to_string(), CellValue::from(fruit)),
            ("tags".to_string(), CellValue::from("a,b")),
            ("note".to_string(), CellValue::from(format!("note {key}"))),
        ]),
        ..RowInput::default()
    }
}

/// Three rows keyed 1..=3 over [`columns`].
pub fn store() -> GridStore {
    store_with(&GridConfig::default())
}

pub fn store_with(config: &GridConfig) -> GridStore {
    let mut store = GridStore::new(config);
    store.set_columns(columns());
    store.load_rows(vec![
        row_input(1, "ann", "a"),
        row_input(2, "bob", "b"),
        row_input(3, "cid", "a"),
    ]);
    store
}

// ============================================================================
// Counting model double
// ============================================================================

/// Implements every model trait and counts the reads made through each.
#[derive(Default)]
pub struct SpyModels {
    pub columns: HashMap<String, (EditType, CopyOptions)>,
    pub rows: HashMap<RowKey, Row>,
    pub selection: Option<Selection>,
    pub selection_text: String,
    pub focus: Option<FocusedCell>,
    pub row_height: u32,

    pub data_reads: Cell<usize>,
    pub render_reads: Cell<usize>,
    pub focus_reads: Cell<usize>,
    pub selection_text_reads: Cell<usize>,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl SpyModels {
    pub fn new() -> Self {
        Self {
            row_height: 27,
            ..Self::default()
        }
    }

    pub fn with_column(mut self, name: &str, edit_type: EditType, copy: CopyOptions) -> Self {
        self.columns.insert(name.to_string(), (edit_type, copy));
        self
    }

    pub fn with_cell(mut self, key: u32, cell: CellData) -> Self {
        let row_key = RowKey::from(key);
        let row = self
            .rows
            .remove(&row_key)
            .unwrap_or_else(|| Row::new(row_key.clone()));
        self.rows.insert(row_key, row.with_cell(cell));
        self
    }

    pub fn focused(mut self, key: u32, column: &str) -> Self {
        self.focus = Some(FocusedCell {
            row_key: RowKey::from(key),
            column_name: column.to_string(),
        });
        self
    }

    pub fn selected(mut self, selection: Selection, text: &str) -> Self {
        self.selection = Some(selection);
        self.selection_text = text.to_string();
        self
    }
}

impl ColumnModel for SpyModels {
    fn edit_type(&self, column_name: &str) -> Option<EditType> {
        self.columns.get(column_name).map(|(t, _)| t.clone())
    }

    fn copy_options(&self, column_name: &str) -> Option<CopyOptions> {
        self.columns.get(column_name).map(|(_, c)| *c)
    }
}

impl DataModel for SpyModels {
    fn get(&self, row_key: &RowKey) -> Option<&Row> {
        bump(&self.data_reads);
        self.rows.get(row_key)
    }
}

impl RenderModel for SpyModels {
    fn cell_data(&self, row_key: &RowKey, column_name: &str) -> Option<&CellData> {
        bump(&self.render_reads);
        self.rows.get(row_key).and_then(|row| row.cell(column_name))
    }
}

impl SelectionModel for SpyModels {
    fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn values_to_string(&self) -> String {
        bump(&self.selection_text_reads);
        self.selection_text.clone()
    }

    fn range(&self) -> Option<Selection> {
        self.selection
    }
}

impl FocusModel for SpyModels {
    fn which(&self) -> Option<FocusedCell> {
        bump(&self.focus_reads);
        self.focus.clone()
    }
}

impl DimensionModel for SpyModels {
    fn row_height(&self) -> u32 {
        self.row_height
    }
}
