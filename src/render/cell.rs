//! Cell renderers, one per edit type.
//!
//! Every renderer produces the full `<td>` markup of a cell and knows how to
//! patch an already rendered cell when its data changes. The shared `<td>`
//! wrapper carries the column name (used by targets to locate the cell), the
//! edit type, the state classes and the row span.

use std::fmt::Write;

use crate::types::{CellData, EditType};

use super::markup::escape_html;
use super::target::CellTarget;

/// Markup and in-place update for one edit type
pub trait CellRenderer {
    /// The edit type this renderer is registered under.
    fn edit_type(&self) -> EditType;

    /// Inner markup of the `<td>`.
    fn content(&self, cell: &CellData) -> String;

    /// Full `<td>` markup.
    fn render(&self, cell: &CellData) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<td columnname=\"{}\" class=\"{}\" edit-type=\"{}\"",
            escape_html(&cell.column_name),
            cell_class(cell),
            escape_html(self.edit_type().as_str())
        );
        if cell.row_span > 1 {
            let _ = write!(html, " rowspan=\"{}\"", cell.row_span);
        }
        html.push('>');
        html.push_str(&self.content(cell));
        html.push_str("</td>");
        html
    }

    /// Patch the rendered cell of `cell.column_name` in `target`.
    ///
    /// Assumes the cell was last drawn by this renderer.
    fn update(&self, cell: &CellData, target: &mut dyn CellTarget) {
        target.set_attribute(&cell.column_name, "class", &cell_class(cell));
        target.set_content(&cell.column_name, &self.content(cell));
    }

    /// Rewrite the rendered cell in full, taking it over from whichever
    /// renderer drew it before.
    fn replace(&self, cell: &CellData, target: &mut dyn CellTarget) {
        target.set_attribute(&cell.column_name, "edit-type", self.edit_type().as_str());
        target.set_attribute(&cell.column_name, "class", &cell_class(cell));
        target.set_content(&cell.column_name, &self.content(cell));
    }
}

/// State classes of a cell
pub fn cell_class(cell: &CellData) -> String {
    let mut class = String::from("cell");
    if cell.is_editable {
        class.push_str(" cell_editable");
    }
    if cell.is_disabled {
        class.push_str(" cell_disabled");
    }
    class
}

/// Read-only text
#[derive(Debug, Default)]
pub struct NormalCell;

impl CellRenderer for NormalCell {
    fn edit_type(&self) -> EditType {
        EditType::Normal
    }

    fn content(&self, cell: &CellData) -> String {
        escape_html(&cell.display_text()).into_owned()
    }
}

/// Text input (`text`, `text-password`, `text-convertible`)
#[derive(Debug)]
pub struct TextCell {
    edit_type: EditType,
}

impl TextCell {
    pub fn text() -> Self {
        Self {
            edit_type: EditType::Text,
        }
    }

    pub fn password() -> Self {
        Self {
            edit_type: EditType::TextPassword,
        }
    }

    /// Displays plain text; the input only exists while the cell is being edited.
    pub fn convertible() -> Self {
        Self {
            edit_type: EditType::TextConvertible,
        }
    }

    fn is_convertible(&self) -> bool {
        self.edit_type == EditType::TextConvertible
    }
}

impl CellRenderer for TextCell {
    fn edit_type(&self) -> EditType {
        self.edit_type.clone()
    }

    fn content(&self, cell: &CellData) -> String {
        if self.is_convertible() {
            return escape_html(&cell.formatted_value).into_owned();
        }
        let input_type = if self.edit_type == EditType::TextPassword {
            "password"
        } else {
            "text"
        };
        let mut html = String::new();
        let _ = write!(
            html,
            "<input type=\"{}\" value=\"{}\" name=\"{}\"",
            input_type,
            escape_html(&cell.value.to_string()),
            escape_html(&cell.column_name)
        );
        if cell.is_disabled {
            html.push_str(" disabled");
        }
        html.push('>');
        html
    }

    fn update(&self, cell: &CellData, target: &mut dyn CellTarget) {
        target.set_attribute(&cell.column_name, "class", &cell_class(cell));
        if self.is_convertible() {
            target.set_content(&cell.column_name, &self.content(cell));
        } else {
            target.set_control_value(&cell.column_name, &cell.value.to_string());
        }
    }
}

/// Drop-down list
#[derive(Debug, Default)]
pub struct SelectCell;

impl CellRenderer for SelectCell {
    fn edit_type(&self) -> EditType {
        EditType::Select
    }

    fn content(&self, cell: &CellData) -> String {
        let current = cell.value.to_string();
        let mut html = String::from("<select");
        let _ = write!(html, " name=\"{}\"", escape_html(&cell.column_name));
        if cell.is_disabled {
            html.push_str(" disabled");
        }
        html.push('>');
        for item in &cell.list_items {
            let selected = if item.value == current { " selected" } else { "" };
            let _ = write!(
                html,
                "<option value=\"{}\"{}>{}</option>",
                escape_html(&item.value),
                selected,
                escape_html(&item.text)
            );
        }
        html.push_str("</select>");
        html
    }

    fn update(&self, cell: &CellData, target: &mut dyn CellTarget) {
        target.set_attribute(&cell.column_name, "class", &cell_class(cell));
        target.set_control_value(&cell.column_name, &cell.value.to_string());
    }
}

/// Checkbox or radio group; checkbox values are comma separated.
#[derive(Debug)]
pub struct ButtonCell {
    edit_type: EditType,
}

impl ButtonCell {
    pub fn checkbox() -> Self {
        Self {
            edit_type: EditType::Checkbox,
        }
    }

    pub fn radio() -> Self {
        Self {
            edit_type: EditType::Radio,
        }
    }
}

impl CellRenderer for ButtonCell {
    fn edit_type(&self) -> EditType {
        self.edit_type.clone()
    }

    fn content(&self, cell: &CellData) -> String {
        let raw = cell.value.to_string();
        let checked: Vec<&str> = raw.split(',').collect();
        let name = format!("{}-{}", cell.column_name, cell.row_key);
        let mut html = String::new();
        for item in &cell.list_items {
            let id = format!("{}-{}", name, item.value);
            let _ = write!(
                html,
                "<input type=\"{}\" name=\"{}\" id=\"{}\" value=\"{}\"{}{}><label for=\"{}\">{}</label>",
                self.edit_type.as_str(),
                escape_html(&name),
                escape_html(&id),
                escape_html(&item.value),
                if checked.contains(&item.value.as_str()) {
                    " checked"
                } else {
                    ""
                },
                if cell.is_disabled { " disabled" } else { "" },
                escape_html(&id),
                escape_html(&item.text)
            );
        }
        html
    }
}
