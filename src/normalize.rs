//! Normalization of raw validator output into `Diagnostic`s.
//!
//! Both functions are total: nothing is dropped here (info entries included)
//! so counts downstream stay consistent with the validator's own reporting.
//! Filtering happens in the report builder.

use crate::models::raw::{RawMarkupMessage, RawStyleMessage};
use crate::models::{Diagnostic, Severity};

/// Map the markup validator's flat message list, preserving order.
pub fn normalize_markup_result(raw: &[RawMarkupMessage]) -> Vec<Diagnostic> {
    raw.iter()
        .map(|m| Diagnostic {
            severity: Severity::from_tag(&m.kind),
            line: m.last_line,
            column: m.last_column,
            message: m.message.clone().unwrap_or_default(),
        })
        .collect()
}

/// Map the style validator's split lists: all errors first, then all
/// warnings. Absent lists count as empty.
pub fn normalize_style_result(
    errors: Option<&[RawStyleMessage]>,
    warnings: Option<&[RawStyleMessage]>,
) -> Vec<Diagnostic> {
    let mut out = tag_style(errors, Severity::Error);
    out.extend(tag_style(warnings, Severity::Warning));
    out
}

fn tag_style(items: Option<&[RawStyleMessage]>, severity: Severity) -> Vec<Diagnostic> {
    items
        .unwrap_or_default()
        .iter()
        .map(|m| Diagnostic {
            severity,
            line: m.line,
            column: None,
            message: m.message.clone().unwrap_or_default(),
        })
        .collect()
}
