//! gridview - row rendering and clipboard handling for a data grid
//!
//! Renders grid rows to HTML markup and keeps mounted rows current by
//! patching only the cells that changed:
//! - Per-edit-type cell renderers (text, password, select, checkbox, radio)
//! - Row-span aware rendering, custom renderers registered by edit type
//! - Copy of the selection or focused cell as delimited text
//! - Paste that tiles the clipboard data across the selection
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView({ rowHeight: 27 });
//! grid.set_columns(columns);
//! grid.load_rows(rows);
//! tbody.innerHTML = grid.render_body();
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod types;
pub mod view;

use wasm_bindgen::prelude::*;

pub use view::GridView;

pub use types::*;

/// Tile delimited clipboard text to `rows` x `cols` and serialize it back
/// using the default clipboard format.
///
/// Returns the input unchanged (after normalization) when the target extent
/// is not a whole multiple of the data.
#[must_use]
#[wasm_bindgen]
pub fn tile_text(text: &str, rows: usize, cols: usize) -> String {
    let format = config::ClipboardFormat::default();
    let data = clipboard::format::parse(text, &format);
    let tiled = clipboard::tile_with(&data, rows, cols, format.tiling);
    clipboard::format::serialize(&tiled, &format)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
