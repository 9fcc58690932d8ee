//
//  cloudfoundry-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Formatting
//!
//! Builds `comfy_table` tables for list commands and styles the values
//! shown in them.
//!
//! ```rust,ignore
//! use cloudfoundry_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["GUID", "TYPE", "STATE"])
//!     .rows([["126e54c4", "docker", "READY"]])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// A table with the CLI's preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder over [`comfy_table::Table`].
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides terminal color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row; cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    /// Appends many rows.
    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.render());
    }

    fn render(self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a package, droplet or job state.
pub fn format_state(state: &str, color: bool) -> String {
    if !color {
        return state.to_string();
    }

    use console::style;
    match state.to_uppercase().as_str() {
        "READY" | "STAGED" | "FINISHED" => style(state).green().to_string(),
        "AWAITING_UPLOAD" | "PROCESSING_UPLOAD" | "COPYING" | "PENDING" | "STAGING"
        | "QUEUED" | "RUNNING" => style(state).yellow().to_string(),
        "FAILED" | "EXPIRED" => style(state).red().to_string(),
        _ => state.to_string(),
    }
}

/// `Yes` / `No`, colored when `color` is set.
pub fn format_bool(value: bool, color: bool) -> String {
    use console::style;
    match (value, color) {
        (true, true) => style("Yes").green().to_string(),
        (false, true) => style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

/// Binary-unit size, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// `value` or `-` when unset.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_render_in_order() {
        let text = TableBuilder::new()
            .color(false)
            .headers(["GUID", "STATE"])
            .rows([["pkg-b", "READY"], ["pkg-a", "FAILED"]])
            .render();

        let header = text.find("GUID").unwrap();
        let first = text.find("pkg-b").unwrap();
        let second = text.find("pkg-a").unwrap();
        assert!(header < first && first < second);
        assert!(text.contains("FAILED"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1.0 MB");
    }

    #[test]
    fn test_plain_state_is_unchanged() {
        assert_eq!(format_state("PROCESSING_UPLOAD", false), "PROCESSING_UPLOAD");
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(or_dash(None), "-");
    }
}
