//! Browser row element (`<tr>`) as a patch target.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use super::markup::cell_selector;
use super::target::CellTarget;

/// A mounted `<tr>` element.
///
/// Cells are located through their `columnname` attribute. Missing cells
/// and DOM failures are logged and skipped.
pub struct DomRow {
    element: Element,
}

impl DomRow {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn cell(&self, column_name: &str) -> Option<Element> {
        match self.element.query_selector(&cell_selector(column_name)) {
            Ok(found) => found,
            Err(err) => {
                tracing::debug!(column = column_name, ?err, "cell lookup failed");
                None
            }
        }
    }
}

impl CellTarget for DomRow {
    fn set_content(&mut self, column_name: &str, markup: &str) {
        if let Some(td) = self.cell(column_name) {
            td.set_inner_html(markup);
        }
    }

    fn set_attribute(&mut self, column_name: &str, name: &str, value: &str) {
        if let Some(td) = self.cell(column_name) {
            if let Err(err) = td.set_attribute(name, value) {
                tracing::debug!(column = column_name, name, ?err, "set attribute failed");
            }
        }
    }

    fn set_control_value(&mut self, column_name: &str, value: &str) {
        let Some(td) = self.cell(column_name) else {
            return;
        };
        let Ok(Some(control)) = td.query_selector("input, select") else {
            return;
        };
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}
