//! Incremental row rendering.
//!
//! This module provides:
//! - Cell renderers dispatched by edit type (`cell`, `factory`)
//! - The row renderer producing row markup and applying change deltas (`row`)
//! - Patch targets: headless rows and, on wasm32, DOM rows (`target`, `dom`)
//! - The registry owning mounted row handles (`registry`)

pub mod cell;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod factory;
pub mod markup;
pub mod registry;
pub mod row;
pub mod target;

pub use cell::{ButtonCell, CellRenderer, NormalCell, SelectCell, TextCell};
#[cfg(target_arch = "wasm32")]
pub use dom::DomRow;
pub use factory::CellRendererFactory;
pub use registry::RowRegistry;
pub use row::{resolve_edit_type, RowRenderer};
pub use target::{CellTarget, PatchOp, RenderedCell, RenderedRow};
