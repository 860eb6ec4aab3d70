//! Human and JSON rendering of command results
//!
//! In JSON mode stdout carries exactly one JSON document per command and
//! errors go to stderr as `{"error": "..."}`.

use comfy_table::{ContentArrangement, Table, presets};
use console::Style;
use serde::Serialize;

use super::OutputConfig;

#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    pub fn is_json(&self) -> bool {
        self.config.json
    }

    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color && !self.config.json
    }

    /// Confirmation line on stdout; silent in quiet and JSON modes
    pub fn success(&self, message: &str) {
        if self.config.quiet || self.config.json {
            return;
        }
        println!("{}", self.marked("✓", Style::new().green(), message));
    }

    /// Error on stderr. Printed even in quiet mode.
    pub fn error(&self, message: &str) {
        if self.config.json {
            let body = serde_json::json!({ "error": message });
            eprintln!("{body}");
        } else {
            eprintln!("{}", self.marked("✗", Style::new().red(), message));
        }
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("cannot serialize output: {e}"),
        }
    }

    pub fn println(&self, message: &str) {
        if !self.config.quiet {
            println!("{message}");
        }
    }

    pub fn table(&self, header: &[&str], rows: Vec<Vec<String>>) {
        if !self.config.quiet {
            println!("{}", render_table(header, rows));
        }
    }

    fn marked(&self, mark: &str, mark_style: Style, message: &str) -> String {
        if self.colors_enabled() {
            format!("{} {message}", mark_style.apply_to(mark))
        } else {
            format!("{mark} {message}")
        }
    }
}

fn render_table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Render a server timestamp as local-independent UTC, or `-` when absent
pub fn format_timestamp(value: Option<&str>) -> String {
    match value {
        Some(raw) => tms_core::models::parse_timestamp(raw)
            .map(|ts| ts.strftime("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => "-".to_string(),
    }
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
