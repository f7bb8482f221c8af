//! ASCII pretty-printing for data tables in the plain-text email variant.
//!
//! Renders a [`Table`] as a bordered text grid: uppercased, centered column
//! headers, left-aligned cells, and long cell text wrapped onto continuation
//! lines. Column widths are display widths, so CJK and other wide characters
//! line up.

use unicode_width::UnicodeWidthStr;

use crate::email::{Entry, Table};

// Cells wider than this wrap onto continuation lines.
const MAX_CELL_WIDTH: usize = 30;

/// Renders a table as bordered plain text. Empty tables render as nothing.
pub(crate) fn render_table(table: &Table) -> String {
    if table.data.is_empty() {
        return String::new();
    }

    let headers: Vec<String> = table.data[0]
        .iter()
        .map(|entry| entry.key.to_uppercase())
        .collect();
    let columns = headers.len();

    // Wrap every cell up front; a row's height is its tallest cell.
    let rows: Vec<Vec<Vec<String>>> = table
        .data
        .iter()
        .map(|row| {
            let mut cells: Vec<Vec<String>> = row
                .iter()
                .take(columns)
                .map(|entry| wrap_cell(cell_text(entry)))
                .collect();
            cells.resize(columns, vec![String::new()]);
            cells
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            for line in cell {
                widths[i] = widths[i].max(line.width());
            }
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    let title = pick(&table.title_unsafe, &table.title);
    if !title.is_empty() {
        out.push_str(title);
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');

    out.push('|');
    for (header, width) in headers.iter().zip(&widths) {
        out.push(' ');
        out.push_str(&pad_center(header, *width));
        out.push_str(" |");
    }
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for line_index in 0..height {
            out.push('|');
            for (cell, width) in row.iter().zip(&widths) {
                let line = cell.get(line_index).map(String::as_str).unwrap_or("");
                out.push(' ');
                out.push_str(&pad_right(line, *width));
                out.push_str(" |");
            }
            out.push('\n');
        }
    }

    out.push_str(&border);
    out.push('\n');

    let footer = pick(&table.footer_unsafe, &table.footer);
    if !footer.is_empty() {
        out.push_str(footer);
        out.push('\n');
    }

    out
}

// The plain-text value of an entry: the safe value, or the unsafe one when
// only that is set.
fn cell_text(entry: &Entry) -> &str {
    if entry.value.is_empty() {
        &entry.unsafe_value
    } else {
        &entry.value
    }
}

fn pick<'a>(unsafe_text: &'a str, safe_text: &'a str) -> &'a str {
    if unsafe_text.is_empty() {
        safe_text
    } else {
        unsafe_text
    }
}

fn wrap_cell(text: &str) -> Vec<String> {
    let wrapped = textwrap::wrap(text, MAX_CELL_WIDTH);
    if wrapped.is_empty() {
        vec![String::new()]
    } else {
        wrapped.into_iter().map(|line| line.into_owned()).collect()
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    let left = padding / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(padding - left)
    )
}
