use std::fmt;

use serde::{Deserialize, Serialize};

/// Column name reserved for the row-number column.
pub const ROW_NUMBER_COLUMN: &str = "_number";

/// Tag selecting which cell renderer handles a cell's markup and in-place updates.
///
/// Serialized as the kebab-case string used in column definitions
/// (`"normal"`, `"text-password"`, ...). Unrecognized tags are preserved as
/// [`EditType::Custom`] so custom renderers can be registered for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EditType {
    /// Read-only display
    #[default]
    Normal,
    Text,
    TextPassword,
    /// Shown as plain text until the editor is opened
    TextConvertible,
    Select,
    Checkbox,
    Radio,
    Custom(String),
}

impl EditType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Text => "text",
            Self::TextPassword => "text-password",
            Self::TextConvertible => "text-convertible",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Custom(name) => name,
        }
    }

    /// Whether the renderer for this type draws a list of items.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Select | Self::Checkbox | Self::Radio)
    }
}

impl From<&str> for EditType {
    fn from(s: &str) -> Self {
        match s {
            "normal" => Self::Normal,
            "text" => Self::Text,
            "text-password" => Self::TextPassword,
            "text-convertible" => Self::TextConvertible,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for EditType {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Custom(_) => Self::Custom(s),
            known => known,
        }
    }
}

impl From<EditType> for String {
    fn from(t: EditType) -> Self {
        match t {
            EditType::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
