//! HTML markup helpers.

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Row container: `<tr key=".." class=".." style="height: Npx;">contents</tr>`
pub fn row_template(key: &str, class_name: &str, height: i64, contents: &str) -> String {
    let mut html = String::with_capacity(contents.len() + 64);
    let _ = write!(
        html,
        "<tr key=\"{}\" class=\"{}\" style=\"height: {}px;\">{}</tr>",
        escape_html(key),
        escape_html(class_name),
        height,
        contents
    );
    html
}

/// CSS selector of the `<td>` rendered for `column_name`.
///
/// The name is written as a quoted CSS string: backslashes and quotes are
/// escaped, line breaks use the `\a ` code point escape.
pub fn cell_selector(column_name: &str) -> String {
    let mut selector = String::with_capacity(column_name.len() + 20);
    selector.push_str("td[columnname=\"");
    for ch in column_name.chars() {
        match ch {
            '\\' => selector.push_str("\\\\"),
            '"' => selector.push_str("\\\""),
            '\n' => selector.push_str("\\a "),
            '\r' => selector.push_str("\\d "),
            _ => selector.push(ch),
        }
    }
    selector.push_str("\"]");
    selector
}
