//! `GridView` - the JavaScript-facing grid.
//!
//! In the browser, rows are rendered to markup, the host inserts it, and
//! mounts each `<tr>` so later value changes patch only the changed cells.
//! Clipboard events are handled here too; copied text is written to
//! `navigator.clipboard`.
//!
//! Outside wasm32 the same core runs with headless [`RenderedRow`] handles.

mod grid;

pub use grid::GridCore;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::clipboard::{ClipboardEvent, ClipboardOutcome};
#[cfg(target_arch = "wasm32")]
use crate::config::GridConfig;
#[cfg(target_arch = "wasm32")]
use crate::model::RowInput;
#[cfg(target_arch = "wasm32")]
use crate::render::DomRow;
#[cfg(not(target_arch = "wasm32"))]
use crate::render::RenderedRow;
#[cfg(target_arch = "wasm32")]
use crate::types::{CellValue, ColumnDef, FocusedCell, RowKey, Selection};

#[cfg(target_arch = "wasm32")]
type RowHandle = DomRow;
#[cfg(not(target_arch = "wasm32"))]
type RowHandle = RenderedRow;

/// The grid exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    core: GridCore<RowHandle>,
}

#[cfg(target_arch = "wasm32")]
fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a grid. `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            from_js(config)?
        };
        Ok(GridView {
            core: GridCore::new(&config)?,
        })
    }

    /// Set the column definitions (array of column objects).
    #[wasm_bindgen]
    pub fn set_columns(&mut self, columns: JsValue) -> Result<(), JsValue> {
        let columns: Vec<ColumnDef> = from_js(columns)?;
        self.core.set_columns(columns);
        Ok(())
    }

    /// Replace all rows (array of `{ rowKey, values, disabled?, rowSpan?, extraData? }`).
    #[wasm_bindgen]
    pub fn load_rows(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<RowInput> = from_js(rows)?;
        self.core.load_rows(rows);
        Ok(())
    }

    /// Markup of every row.
    #[wasm_bindgen]
    pub fn render_body(&self) -> String {
        self.core.render_body()
    }

    /// Markup of one row.
    #[wasm_bindgen]
    pub fn render_row(&self, row_key: JsValue) -> Result<String, JsValue> {
        let key: RowKey = from_js(row_key)?;
        Ok(self.core.render_row(&key)?)
    }

    /// Register the `<tr>` element a row was rendered into.
    #[wasm_bindgen]
    pub fn mount_row(&mut self, row_key: JsValue, element: web_sys::Element) -> Result<(), JsValue> {
        let key: RowKey = from_js(row_key)?;
        self.core.mount_row(key, DomRow::new(element));
        Ok(())
    }

    /// Forget a row element (e.g. when it scrolls out of the rendered range).
    #[wasm_bindgen]
    pub fn unmount_row(&mut self, row_key: JsValue) -> Result<bool, JsValue> {
        let key: RowKey = from_js(row_key)?;
        Ok(self.core.unmount_row(&key).is_some())
    }

    /// Set a cell value and patch the mounted row.
    #[wasm_bindgen]
    pub fn set_value(&mut self, row_key: JsValue, column: &str, value: JsValue) -> Result<(), JsValue> {
        let key: RowKey = from_js(row_key)?;
        let value: CellValue = from_js(value)?;
        Ok(self.core.set_value(&key, column, value)?)
    }

    /// Disable or enable a cell and patch the mounted row.
    #[wasm_bindgen]
    pub fn set_disabled(&mut self, row_key: JsValue, column: &str, disabled: bool) -> Result<(), JsValue> {
        let key: RowKey = from_js(row_key)?;
        Ok(self.core.set_disabled(&key, column, disabled)?)
    }

    #[wasm_bindgen]
    pub fn set_selection(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) {
        self.core.set_selection(Some(Selection::cell_range(
            start_row, start_col, end_row, end_col,
        )));
    }

    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.core.set_selection(None);
    }

    #[wasm_bindgen]
    pub fn set_focus(&mut self, row_key: JsValue, column: &str) -> Result<(), JsValue> {
        let row_key: RowKey = from_js(row_key)?;
        self.core.set_focus(Some(FocusedCell {
            row_key,
            column_name: column.to_string(),
        }));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn clear_focus(&mut self) {
        self.core.set_focus(None);
    }

    /// Handle `{ command: 'copy' | 'paste', text? }`.
    ///
    /// Copy writes the text to the system clipboard and returns
    /// `{ command: 'copy', text }`; paste returns
    /// `{ command: 'paste', origin, data }` with the tiled data.
    #[wasm_bindgen]
    pub fn handle_clipboard(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: ClipboardEvent = from_js(event)?;
        let outcome = self.core.handle_clipboard(&event)?;
        if let ClipboardOutcome::Copy { text } = &outcome {
            copy_to_clipboard_internal(text);
        }
        to_js(&outcome)
    }

    /// Text produced by the last copy.
    #[wasm_bindgen]
    pub fn clipboard_text(&self) -> String {
        self.core.clipboard_text().to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard_internal(text: &str) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Read the system clipboard as text, for use as the `text` of a paste event.
///
/// # Errors
/// Fails when the clipboard is unavailable or permission is denied.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn read_system_clipboard() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise: js_sys::Promise = window.navigator().clipboard().read_text();
    let value = wasm_bindgen_futures::JsFuture::from(promise).await?;
    value
        .as_string()
        .ok_or_else(|| JsValue::from_str("clipboard did not return text"))
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a grid with headless row handles (non-WASM, for testing/CLI).
    pub fn new_headless(config: &crate::config::GridConfig) -> crate::error::Result<Self> {
        Ok(Self {
            core: GridCore::new(config)?,
        })
    }

    pub fn core(&self) -> &GridCore<RenderedRow> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut GridCore<RenderedRow> {
        &mut self.core
    }
}
