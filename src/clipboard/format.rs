//! Clipboard text encoding: a 2-D grid of strings joined by a row delimiter
//! and a column delimiter, with optional quote escaping.

use std::borrow::Cow;

use crate::config::{ClipboardFormat, EscapeStrategy};

/// Escape a single value for the clipboard.
///
/// With [`EscapeStrategy::Quote`], a value containing a delimiter, a carriage
/// return or a quote is wrapped in quotes and its internal quotes are doubled.
pub fn escape_cell_value<'a>(value: &'a str, format: &ClipboardFormat) -> Cow<'a, str> {
    match format.escape {
        EscapeStrategy::None => Cow::Borrowed(value),
        EscapeStrategy::Quote => {
            let needs_quoting = value.contains(format.column_delimiter.as_str())
                || value.contains(format.row_delimiter.as_str())
                || value.contains('\r')
                || value.contains('\n')
                || value.contains('"');
            if needs_quoting {
                Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
            } else {
                Cow::Borrowed(value)
            }
        }
    }
}

/// Join a grid of values into clipboard text (no trailing delimiter).
pub fn serialize<S: AsRef<str>>(rows: &[Vec<S>], format: &ClipboardFormat) -> String {
    let mut result = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx > 0 {
            result.push_str(&format.row_delimiter);
        }
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                result.push_str(&format.column_delimiter);
            }
            result.push_str(&escape_cell_value(value.as_ref(), format));
        }
    }
    result
}

/// Decode clipboard text into a rectangular grid.
///
/// Empty rows left by trailing row delimiters are dropped, a trailing empty
/// column shared by every row (left by a trailing column delimiter) is
/// dropped, and short rows are padded with empty strings. Text without any
/// cell content yields an empty grid.
pub fn parse(text: &str, format: &ClipboardFormat) -> Vec<Vec<String>> {
    let mut rows = match format.escape {
        EscapeStrategy::None => split_plain(text, format),
        EscapeStrategy::Quote => split_quoted(text, format),
    };
    trim_trailing(&mut rows);
    pad_to_rectangle(&mut rows);
    rows
}

/// `\n`-delimited text copied on Windows arrives with `\r\n` line endings.
fn accepts_crlf(format: &ClipboardFormat) -> bool {
    format.row_delimiter == "\n"
}

fn split_plain(text: &str, format: &ClipboardFormat) -> Vec<Vec<String>> {
    let crlf = accepts_crlf(format);
    text.split(format.row_delimiter.as_str())
        .map(|line| {
            let line = if crlf {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            };
            line.split(format.column_delimiter.as_str())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn advance(s: &str, n: usize) -> &str {
    s.get(n..).unwrap_or("")
}

fn split_quoted(text: &str, format: &ClipboardFormat) -> Vec<Vec<String>> {
    let col_delim = format.column_delimiter.as_str();
    let row_delim = format.row_delimiter.as_str();
    let crlf = accepts_crlf(format);

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if in_quotes {
            if let Some(after) = rest.strip_prefix("\"\"") {
                field.push('"');
                rest = after;
            } else if let Some(after) = rest.strip_prefix('"') {
                in_quotes = false;
                rest = after;
            } else {
                field.push(ch);
                rest = advance(rest, ch.len_utf8());
            }
            continue;
        }

        if at_field_start && ch == '"' {
            in_quotes = true;
            at_field_start = false;
            rest = advance(rest, 1);
        } else if let Some(after) = rest.strip_prefix(col_delim) {
            row.push(std::mem::take(&mut field));
            at_field_start = true;
            rest = after;
        } else if let Some(after) = rest
            .strip_prefix(row_delim)
            .or_else(|| crlf.then(|| rest.strip_prefix("\r\n")).flatten())
        {
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
            at_field_start = true;
            rest = after;
        } else {
            field.push(ch);
            at_field_start = false;
            rest = advance(rest, ch.len_utf8());
        }
    }

    row.push(field);
    rows.push(row);
    rows
}

fn trim_trailing(rows: &mut Vec<Vec<String>>) {
    while rows
        .last()
        .is_some_and(|row| row.iter().all(String::is_empty) && row.len() <= 1)
    {
        rows.pop();
    }

    let trailing_empty_column = !rows.is_empty()
        && rows
            .iter()
            .all(|row| row.len() > 1 && row.last().is_some_and(String::is_empty));
    if trailing_empty_column {
        for row in rows.iter_mut() {
            row.pop();
        }
    }
}

fn pad_to_rectangle(rows: &mut [Vec<String>]) {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, String::new());
    }
}
