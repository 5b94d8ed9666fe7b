//! The report sink: where entries go once a run produces them.

use crate::report::ReportEntry;

/// Surface that displays report entries in order.
pub trait ReportSink {
    /// Make the surface visible. `activate` is true only for the first
    /// open; later opens must not steal focus.
    fn open(&mut self, activate: bool);
    fn clear(&mut self);
    fn add(&mut self, entry: ReportEntry);
}

/// In-memory results panel. The CLI renders it after each run.
#[derive(Debug, Default)]
pub struct Panel {
    entries: Vec<ReportEntry>,
    opens: Vec<bool>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// `activate` flag of every open so far, oldest first.
    pub fn opens(&self) -> &[bool] {
        &self.opens
    }
}

impl ReportSink for Panel {
    fn open(&mut self, activate: bool) {
        self.opens.push(activate);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn add(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }
}
