//
//  cloudfoundry-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `cf` CLI:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON output for scripting and automation
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudfoundry_client::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&package)?;
//! writer.write_success("Package deleted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables and detail views with optional color.
    #[default]
    Table,
    /// Pretty-printed JSON of the API response.
    Json,
}

impl OutputFormat {
    /// `Json` when `json` is set, `Table` otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes values and status messages in one [`OutputFormat`].
///
/// Color output is detected from the terminal and disabled when output is
/// piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Writes one value: as JSON, or through its [`TableOutput`] impl.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a success line. Suppressed in JSON mode so stdout stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Implemented by values the CLI can render for humans.
pub trait TableOutput {
    /// Prints the value to stdout.
    fn print_table(&self, color: bool);
}

/// Prints `key: value`, dimming the key when `color` is set.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("  {:<22} {}", style(format!("{}:", key)).dim(), value);
    } else {
        println!("  {:<22} {}", format!("{}:", key), value);
    }
}

/// Prints a bold title line.
pub fn print_header(text: &str, color: bool) {
    use console::style;
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
