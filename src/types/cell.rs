use std::fmt;

use serde::{Deserialize, Serialize};

use super::RowKey;

/// Raw cell value as held by the data model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// An option of a list-based editor (select, checkbox, radio)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    pub value: String,
}

/// Render-ready data of a single cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// Key of the owning row
    pub row_key: RowKey,
    pub column_name: String,
    pub value: CellValue,
    /// Display string (already formatted)
    pub formatted_value: String,
    pub is_editable: bool,
    #[serde(default)]
    pub is_disabled: bool,
    /// True only for the instance that renders a (possibly spanning) logical cell
    pub is_main_row: bool,
    #[serde(default = "default_span")]
    pub row_span: u32,
    /// Items for list editors; empty for everything else.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
}

fn default_span() -> u32 {
    1
}

impl CellData {
    /// Create an editable, main-row cell whose formatted value is the raw value's display form.
    pub fn new(row_key: RowKey, column_name: impl Into<String>, value: CellValue) -> Self {
        let formatted_value = value.to_string();
        Self {
            row_key,
            column_name: column_name.into(),
            value,
            formatted_value,
            is_editable: true,
            is_disabled: false,
            is_main_row: true,
            row_span: 1,
            list_items: Vec::new(),
        }
    }

    /// Text shown for the value; list editors show the item text instead of the raw value.
    pub fn display_text(&self) -> String {
        if self.list_items.is_empty() {
            return self.formatted_value.clone();
        }
        let raw = self.value.to_string();
        let texts: Vec<&str> = raw
            .split(',')
            .filter_map(|v| {
                self.list_items
                    .iter()
                    .find(|item| item.value == v)
                    .map(|item| item.text.as_str())
            })
            .collect();
        if texts.is_empty() {
            self.formatted_value.clone()
        } else {
            texts.join(",")
        }
    }
}
