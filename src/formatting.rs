//! Text rendering helpers shared by the timetable and diary views
//!
//! Views are returned to the MCP client as Markdown tables.

use crate::theme::Theme;

/// Prefix marking the current day header and current slot cell
pub const CURRENT_MARKER: &str = "▶";

/// Make `text` safe to place inside a Markdown table cell
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Prefix `text` with the current marker when `current` is set
pub fn mark_current(text: &str, current: bool) -> String {
    if current {
        format!("{} {}", CURRENT_MARKER, text)
    } else {
        text.to_string()
    }
}

/// Header line with the active theme and the caption of the theme toggle
pub fn format_theme_line(theme: Theme) -> String {
    format!("data-theme: {} | toggle: {}\n", theme, theme.toggle_label())
}

/// Render a Markdown table. Cells are escaped here.
pub fn markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut result = String::new();

    let header_line: Vec<String> = headers.iter().map(|h| escape_cell(h)).collect();
    result.push_str(&format!("| {} |\n", header_line.join(" | ")));
    result.push_str(&format!("|{}\n", "---|".repeat(headers.len())));

    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        result.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    result
}
