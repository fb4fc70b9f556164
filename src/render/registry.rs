//! Ownership of live row elements.
//!
//! Partial updates need the element a row was rendered into. The registry
//! maps each row key to the handle mounted for it; mounting and unmounting
//! are explicit, and a handle is dropped as soon as it is unmounted.

use std::collections::HashMap;

use crate::model::Models;
use crate::types::{Row, RowKey};

use super::row::RowRenderer;
use super::target::CellTarget;

/// Row key to mounted element handle
#[derive(Debug)]
pub struct RowRegistry<H> {
    handles: HashMap<RowKey, H>,
}

impl<H> Default for RowRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> RowRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `handle` for `key`, returning the handle it replaces.
    pub fn mount(&mut self, key: RowKey, handle: H) -> Option<H> {
        self.handles.insert(key, handle)
    }

    pub fn unmount(&mut self, key: &RowKey) -> Option<H> {
        self.handles.remove(key)
    }

    pub fn get(&self, key: &RowKey) -> Option<&H> {
        self.handles.get(key)
    }

    pub fn get_mut(&mut self, key: &RowKey) -> Option<&mut H> {
        self.handles.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

impl<H: CellTarget> RowRegistry<H> {
    /// Apply the row's change delta to its mounted handle.
    ///
    /// Returns `false` when the row has no key or nothing is mounted for it.
    pub fn refresh(&mut self, renderer: &RowRenderer, row: &Row, models: &Models<'_>) -> bool {
        let Some(handle) = row.key.as_ref().and_then(|key| self.handles.get_mut(key)) else {
            return false;
        };
        renderer.on_update(row, handle, models);
        true
    }
}
