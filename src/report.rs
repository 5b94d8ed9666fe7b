//! Report entries and the report builder.
//!
//! A `Report` is transient: it is rebuilt from scratch on every run and
//! handed to the sink as an ordered list of entries.

use crate::document::Document;
use crate::models::{Diagnostic, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Styling tag attached to plain and line entries.
pub enum EntryClass {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

impl From<Severity> for EntryClass {
    fn from(sev: Severity) -> Self {
        match sev {
            Severity::Error => EntryClass::Error,
            Severity::Warning => EntryClass::Warning,
            Severity::Info => EntryClass::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// One renderable item of the results panel.
pub enum ReportEntry {
    Progress {
        message: String,
    },
    Plain {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        class: EntryClass,
    },
    Line {
        line: Option<u32>,
        column: Option<u32>,
        message: String,
        preview: String,
        class: EntryClass,
    },
}

pub const NO_ERRORS: &str = "No errors were found!";
pub const FAILED_WITH_ERROR: &str = "Validation fails with error.";
pub const FAILED_WITHOUT_ERROR: &str = "Validation fails without error.";

impl ReportEntry {
    pub fn progress(path: &str) -> Self {
        ReportEntry::Progress {
            message: format!("Validating {}", path),
        }
    }

    pub fn no_errors() -> Self {
        ReportEntry::Plain {
            message: NO_ERRORS.into(),
            detail: None,
            class: EntryClass::Success,
        }
    }

    /// The validator errored; `detail` is the failure's message.
    pub fn hard_failure(detail: impl Into<String>) -> Self {
        ReportEntry::Plain {
            message: FAILED_WITH_ERROR.into(),
            detail: Some(detail.into()),
            class: EntryClass::Error,
        }
    }

    /// The validator answered but with nothing usable.
    pub fn empty_result() -> Self {
        ReportEntry::Plain {
            message: FAILED_WITHOUT_ERROR.into(),
            detail: None,
            class: EntryClass::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Counted, line-anchored findings of one completed run.
pub struct Report {
    pub target_path: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub entries: Vec<ReportEntry>,
}

/// "0 errors", "1 error", "2 errors".
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

pub fn summary_line(path: &str, errors: usize, warnings: usize) -> String {
    format!(
        "{} - {}, {}",
        path,
        pluralize(errors, "error"),
        pluralize(warnings, "warning")
    )
}

/// Build the report for `diagnostics`, dropping info and looking up a
/// trimmed preview of each diagnostic's source line in `document`.
pub fn build_report<D: Document + ?Sized>(document: &D, diagnostics: &[Diagnostic]) -> Report {
    let shown: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.severity != Severity::Info)
        .collect();
    let error_count = shown
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = shown
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    let mut entries = Vec::with_capacity(shown.len() + 1);
    entries.push(ReportEntry::Plain {
        message: summary_line(document.path(), error_count, warning_count),
        detail: None,
        class: EntryClass::Plain,
    });
    if shown.is_empty() {
        entries.push(ReportEntry::no_errors());
    }
    for d in shown {
        entries.push(ReportEntry::Line {
            line: d.line,
            column: d.column,
            message: d.message.clone(),
            preview: preview_for(document, d.line),
            class: d.severity.into(),
        });
    }

    Report {
        target_path: document.path().to_string(),
        error_count,
        warning_count,
        entries,
    }
}

fn preview_for<D: Document + ?Sized>(document: &D, line: Option<u32>) -> String {
    line.and_then(|l| l.checked_sub(1))
        .and_then(|row| document.line_text(row as usize))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FileDocument;

    fn diag(severity: Severity, line: Option<u32>, column: Option<u32>, msg: &str) -> Diagnostic {
        Diagnostic {
            severity,
            line,
            column,
            message: msg.into(),
        }
    }

    fn doc() -> FileDocument {
        FileDocument::from_parts(
            "index.html",
            "<!doctype html>\n<html>\n   <blink>hi</blink>  \n</html>\n",
            "text.html.basic",
        )
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "error"), "0 errors");
        assert_eq!(pluralize(1, "error"), "1 error");
        assert_eq!(pluralize(2, "warning"), "2 warnings");
    }

    #[test]
    fn test_report_counts_and_previews() {
        let diags = vec![
            diag(Severity::Error, Some(3), Some(5), "Bad tag"),
            diag(Severity::Info, Some(1), None, "hint"),
            diag(Severity::Warning, Some(2), Some(1), "Consider lang"),
        ];
        let rep = build_report(&doc(), &diags);
        assert_eq!(rep.error_count, 1);
        assert_eq!(rep.warning_count, 1);
        assert_eq!(rep.entries.len(), 3);
        assert_eq!(
            rep.entries[0],
            ReportEntry::Plain {
                message: "index.html - 1 error, 1 warning".into(),
                detail: None,
                class: EntryClass::Plain,
            }
        );
        assert_eq!(
            rep.entries[1],
            ReportEntry::Line {
                line: Some(3),
                column: Some(5),
                message: "Bad tag".into(),
                preview: "<blink>hi</blink>".into(),
                class: EntryClass::Error,
            }
        );
        assert!(matches!(
            &rep.entries[2],
            ReportEntry::Line { class: EntryClass::Warning, preview, .. } if preview == "<html>"
        ));
    }

    #[test]
    fn test_report_all_info_yields_no_errors_marker() {
        let diags = vec![diag(Severity::Info, Some(1), None, "hint")];
        let rep = build_report(&doc(), &diags);
        assert_eq!(rep.entries.len(), 2);
        assert!(matches!(&rep.entries[0], ReportEntry::Plain { message, .. } if message.ends_with("0 errors, 0 warnings")));
        assert_eq!(rep.entries[1], ReportEntry::no_errors());
    }

    #[test]
    fn test_preview_out_of_range_is_empty() {
        let diags = vec![
            diag(Severity::Error, Some(99), None, "far"),
            diag(Severity::Error, Some(0), None, "zero"),
            diag(Severity::Error, None, None, "nowhere"),
        ];
        let rep = build_report(&doc(), &diags);
        for e in &rep.entries[1..] {
            assert!(matches!(e, ReportEntry::Line { preview, .. } if preview.is_empty()));
        }
    }
}
