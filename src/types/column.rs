use serde::{Deserialize, Serialize};

use super::{EditType, ListItem};

/// Per-column clipboard options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOptions {
    /// Copy the rendered (formatted) value instead of the raw value
    #[serde(default)]
    pub use_formatted_value: bool,
    /// Copy the item text of list editors instead of the item value
    #[serde(default)]
    pub use_list_item_text: bool,
}

/// Static configuration of one column
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub edit_type: EditType,
    #[serde(default = "default_editable")]
    pub editable: bool,
    #[serde(default)]
    pub copy_options: CopyOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
}

fn default_editable() -> bool {
    true
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, edit_type: EditType) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            edit_type,
            editable: true,
            copy_options: CopyOptions::default(),
            list_items: Vec::new(),
        }
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn with_copy_options(mut self, copy_options: CopyOptions) -> Self {
        self.copy_options = copy_options;
        self
    }

    pub fn with_list_items(mut self, items: Vec<ListItem>) -> Self {
        self.list_items = items;
        self
    }
}
