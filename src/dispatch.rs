//! Dispatcher: runs one validation end to end and writes the report sink.
//!
//! A run is split in two halves so the validator call can complete later:
//! - `begin` clears and opens the sink, emits the progress entry, classifies
//!   the document and returns an `Invocation` describing the call to make.
//! - `complete` takes the validator outcome and commits either a report or
//!   a failure entry.
//!
//! Every `begin` mints a new token. `complete` only writes when its
//! invocation's token is still the active one; completions of superseded
//! runs are discarded.

use crate::document::Document;
use crate::models::raw::{MarkupResponse, StyleResult};
use crate::normalize::{normalize_markup_result, normalize_style_result};
use crate::report::{build_report, ReportEntry};
use crate::sink::ReportSink;
use crate::target::{classify, Target};
use crate::validator::{MarkupValidator, StyleOptions, StyleValidator, ValidationFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvocationToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// The validator call a run needs. Exactly one per invocation.
pub enum Request {
    Markup { text: String },
    Style { text: String, options: StyleOptions },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A dispatched run waiting for its validator.
pub struct Invocation {
    pub token: InvocationToken,
    pub target: Target,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq)]
/// What the validator came back with.
pub enum Outcome {
    Markup(Result<MarkupResponse, ValidationFailure>),
    Style(Result<StyleResult, ValidationFailure>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a run ended, from the caller's point of view.
pub enum RunStatus {
    /// No active document, or a content type no validator handles.
    Skipped,
    Completed { errors: usize, warnings: usize },
    /// Hard failure or an empty validator answer.
    Failed,
    /// A newer run started before this one completed.
    Stale,
}

/// Orchestrates validation runs against an owned report sink.
pub struct Dispatcher<S: ReportSink> {
    sink: S,
    style_options: StyleOptions,
    next_token: u64,
    active: Option<InvocationToken>,
    opened: bool,
}

impl<S: ReportSink> Dispatcher<S> {
    pub fn new(sink: S, style_options: StyleOptions) -> Self {
        Self {
            sink,
            style_options,
            next_token: 0,
            active: None,
            opened: false,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Start a run for the active document, if any.
    ///
    /// Returns `None` when there is nothing to dispatch: without a document
    /// the sink is left untouched; with an unsupported content type only the
    /// progress entry is shown.
    pub fn begin<D: Document + ?Sized>(&mut self, document: Option<&D>) -> Option<Invocation> {
        let document = document?;

        self.next_token += 1;
        let token = InvocationToken(self.next_token);
        self.active = Some(token);

        self.sink.clear();
        self.sink.open(!self.opened);
        self.opened = true;
        self.sink.add(ReportEntry::progress(document.path()));

        let target = classify(document.grammar());
        tracing::debug!(
            token = token.0,
            path = document.path(),
            grammar = document.grammar(),
            ?target,
            "validation dispatched"
        );
        let request = match target {
            Target::Html => Request::Markup {
                text: document.text().to_string(),
            },
            Target::Css => Request::Style {
                text: document.text().to_string(),
                options: self.style_options.clone(),
            },
            Target::Unsupported => return None,
        };
        Some(Invocation {
            token,
            target,
            request,
        })
    }

    /// Commit the outcome of `invocation` to the sink.
    pub fn complete<D: Document + ?Sized>(
        &mut self,
        document: &D,
        invocation: Invocation,
        outcome: Outcome,
    ) -> RunStatus {
        if self.active != Some(invocation.token) {
            tracing::debug!(
                token = invocation.token.0,
                active = ?self.active.map(|t| t.0),
                "discarding stale completion"
            );
            return RunStatus::Stale;
        }
        self.active = None;

        let token = invocation.token.0;
        let diagnostics = match (invocation.target, outcome) {
            (_, Outcome::Markup(Err(failure)) | Outcome::Style(Err(failure))) => {
                tracing::debug!(token, %failure, "validation failed");
                self.sink.clear();
                self.sink.add(ReportEntry::hard_failure(failure.to_string()));
                return RunStatus::Failed;
            }
            (Target::Html, Outcome::Markup(Ok(MarkupResponse { messages: Some(m) }))) => {
                normalize_markup_result(&m)
            }
            (Target::Html, Outcome::Markup(Ok(MarkupResponse { messages: None }))) => {
                tracing::debug!(token, "markup validator returned no messages");
                self.sink.add(ReportEntry::empty_result());
                return RunStatus::Failed;
            }
            (Target::Css, Outcome::Style(Ok(res))) => {
                normalize_style_result(res.errors.as_deref(), res.warnings.as_deref())
            }
            (target, _) => {
                tracing::debug!(token, ?target, "outcome does not belong to the dispatched validator");
                self.sink.clear();
                self.sink.add(ReportEntry::hard_failure(format!(
                    "{:?} validation completed with a result from another validator",
                    target
                )));
                return RunStatus::Failed;
            }
        };

        let report = build_report(document, &diagnostics);
        self.sink.clear();
        for entry in report.entries {
            self.sink.add(entry);
        }
        RunStatus::Completed {
            errors: report.error_count,
            warnings: report.warning_count,
        }
    }

    /// Run `begin`, call the matching validator, then `complete`.
    pub fn validate_now<D, M, C>(
        &mut self,
        document: Option<&D>,
        markup: &M,
        style: &C,
    ) -> RunStatus
    where
        D: Document + ?Sized,
        M: MarkupValidator + ?Sized,
        C: StyleValidator + ?Sized,
    {
        let Some(doc) = document else {
            return RunStatus::Skipped;
        };
        let Some(invocation) = self.begin(Some(doc)) else {
            return RunStatus::Skipped;
        };
        let outcome = match &invocation.request {
            Request::Markup { text } => Outcome::Markup(markup.validate(text)),
            Request::Style { text, options } => Outcome::Style(style.validate(text, options)),
        };
        self.complete(doc, invocation, outcome)
    }
}
