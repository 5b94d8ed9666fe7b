//! Output rendering of the results panel.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! panel entries verbatim plus the run's counts.

use crate::dispatch::RunStatus;
use crate::report::{EntryClass, ReportEntry};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the panel contents left by one run.
pub fn print_panel(path: &str, entries: &[ReportEntry], status: RunStatus, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_panel_json(path, entries, status))
                .unwrap_or_default()
        ),
        _ => {
            let color = use_colors(output);
            for entry in entries {
                println!("{}", render_entry(entry, color));
            }
        }
    }
}

fn icon(class: EntryClass, color: bool) -> String {
    let glyph = match class {
        EntryClass::Error => "✖",
        EntryClass::Warning => "▲",
        EntryClass::Success => "✔",
        EntryClass::Info => "◆",
        EntryClass::Plain => "⌕",
    };
    if !color {
        return glyph.to_string();
    }
    match class {
        EntryClass::Error => glyph.red().to_string(),
        EntryClass::Warning => glyph.yellow().to_string(),
        EntryClass::Success => glyph.green().to_string(),
        EntryClass::Info => glyph.blue().to_string(),
        EntryClass::Plain => glyph.bright_black().to_string(),
    }
}

/// Render one entry as a single human-readable line (two for previews).
pub fn render_entry(entry: &ReportEntry, color: bool) -> String {
    match entry {
        ReportEntry::Progress { message } => {
            let glyph = if color {
                "⧗".blue().to_string()
            } else {
                "⧗".to_string()
            };
            format!("{} {}", glyph, message)
        }
        ReportEntry::Plain {
            message,
            detail,
            class,
        } => {
            let head = if color && *class == EntryClass::Plain {
                message.bold().to_string()
            } else {
                message.clone()
            };
            match detail {
                Some(d) => format!("{} {} — {}", icon(*class, color), head, d),
                None => format!("{} {}", icon(*class, color), head),
            }
        }
        ReportEntry::Line {
            line,
            column,
            message,
            preview,
            class,
        } => {
            let loc = match (line, column) {
                (Some(l), Some(c)) => format!("{}:{}", l, c),
                (Some(l), None) => l.to_string(),
                _ => "?".to_string(),
            };
            let loc = if color {
                loc.bold().to_string()
            } else {
                loc
            };
            let mut out = format!("{} {} {}", icon(*class, color), loc, message);
            if !preview.is_empty() {
                let p = if color {
                    preview.bright_black().to_string()
                } else {
                    preview.clone()
                };
                out.push_str(&format!("\n    {}", p));
            }
            out
        }
    }
}

/// Compose the panel JSON object (pure) for testing/snapshot purposes.
pub fn compose_panel_json(path: &str, entries: &[ReportEntry], status: RunStatus) -> JsonVal {
    let (state, errors, warnings) = match status {
        RunStatus::Completed { errors, warnings } => ("completed", errors, warnings),
        RunStatus::Failed => ("failed", 0, 0),
        RunStatus::Skipped => ("skipped", 0, 0),
        RunStatus::Stale => ("stale", 0, 0),
    };
    json!({
        "path": path,
        "entries": entries,
        "summary": {
            "status": state,
            "errors": errors,
            "warnings": warnings,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_entry_plain() {
        let e = ReportEntry::Line {
            line: Some(3),
            column: Some(5),
            message: "Bad tag".into(),
            preview: "<foo>".into(),
            class: EntryClass::Error,
        };
        assert_eq!(render_entry(&e, false), "✖ 3:5 Bad tag\n    <foo>");
        let e = ReportEntry::Line {
            line: Some(10),
            column: None,
            message: "Deprecated".into(),
            preview: String::new(),
            class: EntryClass::Warning,
        };
        assert_eq!(render_entry(&e, false), "▲ 10 Deprecated");
    }

    #[test]
    fn test_render_failure_carries_detail() {
        let e = ReportEntry::hard_failure("timed out");
        assert_eq!(
            render_entry(&e, false),
            "✖ Validation fails with error. — timed out"
        );
        assert_eq!(
            render_entry(&ReportEntry::progress("a.css"), false),
            "⧗ Validating a.css"
        );
    }

    #[test]
    fn test_compose_panel_json_shape() {
        let entries = vec![
            ReportEntry::Plain {
                message: "a.css - 0 errors, 1 warning".into(),
                detail: None,
                class: EntryClass::Plain,
            },
            ReportEntry::Line {
                line: Some(10),
                column: None,
                message: "Deprecated".into(),
                preview: String::new(),
                class: EntryClass::Warning,
            },
        ];
        let out = compose_panel_json(
            "a.css",
            &entries,
            RunStatus::Completed {
                errors: 0,
                warnings: 1,
            },
        );
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["status"], "completed");
        assert_eq!(out["entries"][0]["kind"], "plain");
        assert!(out["entries"][0].get("detail").is_none());
        assert_eq!(out["entries"][1]["class"], "warning");
        assert!(out["entries"][1]["column"].is_null());
    }
}
