//! Read interfaces of the grid's collaborating models.
//!
//! The renderer and the clipboard controller only ever read through these
//! traits. [`GridStore`] is an in-memory implementation of all of them.

mod store;

pub use store::{GridStore, RowInput};

use crate::types::{CellData, CopyOptions, EditType, FocusedCell, Row, RowKey, Selection};

/// Column schema lookups
pub trait ColumnModel {
    /// Configured edit type; `None` when the column is not configured.
    fn edit_type(&self, column_name: &str) -> Option<EditType>;
    /// Clipboard options; `None` when the column is not configured.
    fn copy_options(&self, column_name: &str) -> Option<CopyOptions>;
}

/// Row storage
pub trait DataModel {
    fn get(&self, row_key: &RowKey) -> Option<&Row>;
}

/// Render-ready cell data
pub trait RenderModel {
    fn cell_data(&self, row_key: &RowKey, column_name: &str) -> Option<&CellData>;
}

pub trait SelectionModel {
    fn has_selection(&self) -> bool;
    /// The selected cells serialized as clipboard text.
    fn values_to_string(&self) -> String;
    fn range(&self) -> Option<Selection>;
}

pub trait FocusModel {
    /// The focused cell, if any.
    fn which(&self) -> Option<FocusedCell>;
}

pub trait DimensionModel {
    /// Configured row height in CSS pixels.
    fn row_height(&self) -> u32;
}

/// Borrowed set of the collaborating models, as consumed by the row renderer
/// and the clipboard controller.
#[derive(Clone, Copy)]
pub struct Models<'a> {
    pub columns: &'a dyn ColumnModel,
    pub data: &'a dyn DataModel,
    pub render: &'a dyn RenderModel,
    pub selection: &'a dyn SelectionModel,
    pub focus: &'a dyn FocusModel,
    pub dimension: &'a dyn DimensionModel,
}

impl<'a> Models<'a> {
    /// Use one value for every model.
    pub fn uniform<M>(models: &'a M) -> Self
    where
        M: ColumnModel + DataModel + RenderModel + SelectionModel + FocusModel + DimensionModel,
    {
        Self {
            columns: models,
            data: models,
            render: models,
            selection: models,
            focus: models,
            dimension: models,
        }
    }
}
