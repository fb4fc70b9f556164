//! Lookup table from edit type to cell renderer.

use std::collections::HashMap;

use crate::types::EditType;

use super::cell::{ButtonCell, CellRenderer, NormalCell, SelectCell, TextCell};

/// Resolves an [`EditType`] to its renderer instance.
///
/// Renderers are stateless and shared by every row. Custom edit types are
/// supported by registering a renderer whose `edit_type()` returns the tag.
pub struct CellRendererFactory {
    renderers: HashMap<EditType, Box<dyn CellRenderer>>,
    fallback: NormalCell,
}

impl Default for CellRendererFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(Box::new(NormalCell));
        factory.register(Box::new(TextCell::text()));
        factory.register(Box::new(TextCell::password()));
        factory.register(Box::new(TextCell::convertible()));
        factory.register(Box::new(SelectCell));
        factory.register(Box::new(ButtonCell::checkbox()));
        factory.register(Box::new(ButtonCell::radio()));
        factory
    }
}

impl CellRendererFactory {
    /// A factory without any registered renderer; every lookup falls back to `normal`.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: NormalCell,
        }
    }

    /// Register a renderer, replacing any previous one for the same edit type.
    pub fn register(&mut self, renderer: Box<dyn CellRenderer>) {
        self.renderers.insert(renderer.edit_type(), renderer);
    }

    pub fn contains(&self, edit_type: &EditType) -> bool {
        self.renderers.contains_key(edit_type)
    }

    /// The renderer for `edit_type`, or the `normal` renderer if none is registered.
    pub fn get_instance(&self, edit_type: &EditType) -> &dyn CellRenderer {
        match self.renderers.get(edit_type) {
            Some(renderer) => renderer.as_ref(),
            None => {
                tracing::warn!(%edit_type, "no cell renderer registered, using normal");
                &self.fallback
            }
        }
    }
}
