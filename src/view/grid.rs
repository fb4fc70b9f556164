//! Target-independent grid state: models, renderer, clipboard and mounted rows.

use crate::clipboard::{ClipboardController, ClipboardEvent, ClipboardOutcome};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::model::{GridStore, Models, RowInput};
use crate::render::{CellTarget, RowRegistry, RowRenderer};
use crate::types::{CellValue, ColumnDef, FocusedCell, RowKey, Selection};

/// Grid state generic over the row handle type (`DomRow` in the browser,
/// `RenderedRow` elsewhere).
pub struct GridCore<H> {
    store: GridStore,
    renderer: RowRenderer,
    clipboard: ClipboardController,
    registry: RowRegistry<H>,
}

impl<H: CellTarget> GridCore<H> {
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: GridStore::new(config),
            renderer: RowRenderer::new(Vec::new(), config),
            clipboard: ClipboardController::new(config.clipboard.clone()),
            registry: RowRegistry::new(),
        })
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn renderer_mut(&mut self) -> &mut RowRenderer {
        &mut self.renderer
    }

    pub fn registry(&self) -> &RowRegistry<H> {
        &self.registry
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDef>) {
        self.renderer
            .set_column_names(columns.iter().map(|c| c.name.clone()).collect());
        self.store.set_columns(columns);
    }

    /// Replace all rows; mounted handles are dropped since their markup is stale.
    pub fn load_rows(&mut self, rows: Vec<RowInput>) {
        self.registry.clear();
        self.store.load_rows(rows);
    }

    pub fn render_row(&self, key: &RowKey) -> Result<String> {
        let row = self
            .store
            .row(key)
            .ok_or_else(|| GridError::RowNotFound(key.to_string()))?;
        Ok(self.renderer.render(row, &Models::uniform(&self.store)))
    }

    /// Markup of every row in order.
    pub fn render_body(&self) -> String {
        let models = Models::uniform(&self.store);
        self.store
            .rows()
            .iter()
            .map(|row| self.renderer.render(row, &models))
            .collect()
    }

    pub fn mount_row(&mut self, key: RowKey, handle: H) -> Option<H> {
        self.registry.mount(key, handle)
    }

    pub fn unmount_row(&mut self, key: &RowKey) -> Option<H> {
        self.registry.unmount(key)
    }

    pub fn row_handle(&self, key: &RowKey) -> Option<&H> {
        self.registry.get(key)
    }

    /// Set a value and patch the mounted row, if any.
    pub fn set_value(&mut self, key: &RowKey, column_name: &str, value: CellValue) -> Result<()> {
        self.store.set_value(key, column_name, value)?;
        self.flush(key);
        Ok(())
    }

    pub fn set_disabled(&mut self, key: &RowKey, column_name: &str, disabled: bool) -> Result<()> {
        self.store.set_disabled(key, column_name, disabled)?;
        self.flush(key);
        Ok(())
    }

    pub fn set_extra_data(&mut self, key: &RowKey, data: serde_json::Value) -> Result<()> {
        self.store.set_extra_data(key, data)?;
        self.flush(key);
        Ok(())
    }

    /// Deliver the row's pending change delta to its handle, then clear it.
    fn flush(&mut self, key: &RowKey) {
        if let Some(row) = self.store.row(key) {
            let models = Models::uniform(&self.store);
            if !self.registry.refresh(&self.renderer, row, &models) {
                tracing::trace!(row = %key, "row not mounted, skipping patch");
            }
        }
        self.store.take_changes(key);
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.store.set_selection(selection);
    }

    pub fn set_focus(&mut self, focus: Option<FocusedCell>) {
        self.store.set_focus(focus);
    }

    pub fn handle_clipboard(&mut self, event: &ClipboardEvent) -> Result<ClipboardOutcome> {
        self.clipboard.handle(event, &Models::uniform(&self.store))
    }

    pub fn clipboard_text(&self) -> &str {
        self.clipboard.text()
    }
}
