//! Shared data models: the unified diagnostic and the raw validator shapes.

pub mod raw;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a normalized diagnostic. `Info` is never rendered.
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Re-tag a validator severity string.
    ///
    /// `non-document-error` is what the Nu checker emits when it could not
    /// read the input at all, so it counts as an error. Unknown tags fall
    /// back to `Info` (logged at debug level) and are filtered out of the
    /// report.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "error" | "non-document-error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => {
                tracing::debug!(tag = other, "unrecognized severity tag treated as info");
                Severity::Info
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single validation finding, immutable once normalized.
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based; best effort, some validator outputs omit it.
    pub line: Option<u32>,
    /// 1-based; only the markup validator reports it.
    pub column: Option<u32>,
    pub message: String,
}
