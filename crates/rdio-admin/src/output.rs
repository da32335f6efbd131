//! Output formatting: JSON, YAML, tables, and status lines.
//!
//! Documents go to stdout in the format selected by `--output`. Reports
//! and status lines go to stderr so stdout stays pipeable.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use rdio_admin_core::MigrationReport;
use rdio_admin_core::model::DEFAULT_OPTIONS;
use rdio_admin_core::model::OptionDefault;

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled on stderr.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Print a success line to stderr, respecting quiet mode.
pub fn print_success(message: &str, color: bool, quiet: bool) {
    if quiet {
        return;
    }
    let mut stderr = io::stderr().lock();
    if color {
        let _ = writeln!(stderr, "{} {message}", "✓".green().bold());
    } else {
        let _ = writeln!(stderr, "✓ {message}");
    }
}

/// Print a notice line to stderr, respecting quiet mode.
pub fn print_notice(message: &str, color: bool, quiet: bool) {
    if quiet {
        return;
    }
    let mut stderr = io::stderr().lock();
    if color {
        let _ = writeln!(stderr, "{}", message.yellow());
    } else {
        let _ = writeln!(stderr, "{message}");
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render any serde-serializable value in the chosen format.
pub fn render_document<T: serde::Serialize + ?Sized>(format: OutputFormat, data: &T) -> String {
    match format {
        OutputFormat::Json => render_json_pretty(data),
        OutputFormat::JsonCompact => render_json_compact(data),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Tables ───────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Change")]
    change: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Migration report as a table; rows with a zero count are omitted.
pub fn render_report(report: &MigrationReport) -> String {
    if report.is_noop() {
        return "Already canonical: no changes.".into();
    }
    let rows: Vec<ReportRow> = report
        .rows()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(change, count)| ReportRow { change, count })
        .collect();
    render_table(&rows)
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Default")]
    default: String,
}

pub fn render_default_options() -> String {
    let rows: Vec<OptionRow> = DEFAULT_OPTIONS
        .iter()
        .map(|&(key, default)| {
            let (kind, default) = match default {
                OptionDefault::Bool(b) => ("bool", b.to_string()),
                OptionDefault::Int(n) => ("int", n.to_string()),
                OptionDefault::Str(s) => ("string", format!("{s:?}")),
            };
            OptionRow { key, kind, default }
        })
        .collect();
    render_table(&rows)
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
pub(crate) fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
pub(crate) fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

/// YAML output.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn noop_report_renders_a_sentence() {
        assert_eq!(
            render_report(&MigrationReport::default()),
            "Already canonical: no changes."
        );
    }

    #[test]
    fn report_table_lists_only_nonzero_rows() {
        let report = MigrationReport {
            ids_renamed: 3,
            ..Default::default()
        };
        let table = render_report(&report);
        assert!(table.contains("legacy ids renamed"));
        assert!(!table.contains("options pruned"));
    }

    #[test]
    fn documents_render_in_each_format() {
        let doc = json!({"groups": [{"id": 1, "label": "Fire"}]});
        assert_eq!(
            render_document(OutputFormat::JsonCompact, &doc),
            r#"{"groups":[{"id":1,"label":"Fire"}]}"#
        );
        assert!(render_document(OutputFormat::Json, &doc).contains("\n"));
        assert!(render_document(OutputFormat::Yaml, &doc).contains("label: Fire"));
    }

    #[test]
    fn defaults_table_lists_every_key() {
        let table = render_default_options();
        for (key, _) in DEFAULT_OPTIONS {
            assert!(table.contains(key), "missing {key}");
        }
    }
}
