//! Validate a list of files one after another.
//!
//! Path arguments are expanded in order; each file gets its own run through a
//! single dispatcher, and the worst run decides the exit status.

use crate::dispatch::{Dispatcher, RunStatus};
use crate::document::{Document, FileDocument};
use crate::error::{AppError, AppResult};
use crate::report::ReportEntry;
use crate::sink::Panel;
use crate::validator::{MarkupValidator, StyleOptions, StyleValidator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Overall result of validating a set of files.
pub enum Verdict {
    Clean,
    /// At least one run reported errors or failed outright.
    Failing,
}

impl Verdict {
    pub fn code(self) -> u8 {
        match self {
            Verdict::Clean => 0,
            Verdict::Failing => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Expand literal paths and glob patterns, keeping argument order.
///
/// No patterns yields no paths; patterns that match nothing are an error.
pub fn expand_paths(patterns: &[String]) -> AppResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    for pat in patterns {
        if Path::new(pat).is_file() {
            out.push(PathBuf::from(pat));
            continue;
        }
        let entries = glob::glob(pat).map_err(|source| AppError::BadPattern {
            pattern: pat.clone(),
            source,
        })?;
        out.extend(entries.flatten().filter(|p| p.is_file()));
    }
    if out.is_empty() && !patterns.is_empty() {
        return Err(AppError::NothingMatched {
            patterns: patterns.join(", "),
        });
    }
    Ok(out)
}

/// Whether a single run should make the process exit non-zero.
pub fn is_failing(status: RunStatus) -> bool {
    match status {
        RunStatus::Completed { errors, .. } => errors > 0,
        RunStatus::Failed => true,
        RunStatus::Skipped | RunStatus::Stale => false,
    }
}

/// Validate `files` in order, handing each finished panel to `on_run`.
///
/// An empty list is a no-op run. The first unreadable file aborts the rest.
pub fn validate_files<M, C, F>(
    files: &[PathBuf],
    root: &Path,
    grammar: Option<&str>,
    style_options: StyleOptions,
    markup: &M,
    style: &C,
    mut on_run: F,
) -> AppResult<Verdict>
where
    M: MarkupValidator + ?Sized,
    C: StyleValidator + ?Sized,
    F: FnMut(&FileDocument, &[ReportEntry], RunStatus),
{
    let mut dispatcher = Dispatcher::new(Panel::new(), style_options);
    if files.is_empty() {
        dispatcher.validate_now::<FileDocument, _, _>(None, markup, style);
        return Ok(Verdict::Clean);
    }

    let mut verdict = Verdict::Clean;
    for file in files {
        let doc = FileDocument::open(file, root, grammar)?;
        let status = dispatcher.validate_now(Some(&doc), markup, style);
        tracing::debug!(path = doc.path(), ?status, "run finished");
        on_run(&doc, dispatcher.sink().entries(), status);
        if is_failing(status) {
            verdict = Verdict::Failing;
        }
    }
    Ok(verdict)
}
