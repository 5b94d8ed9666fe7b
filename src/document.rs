//! The document being validated.
//!
//! The pipeline only needs four things from a document: its text, a path to
//! display, a grammar scope for validator selection, and single-line lookup
//! for report previews.

use crate::error::{AppError, AppResult};
use crate::target::grammar_for_extension;
use std::fs;
use std::ops::Range;
use std::path::Path;

pub trait Document {
    fn path(&self) -> &str;
    fn text(&self) -> &str;
    fn grammar(&self) -> &str;
    /// Text of the 0-based `row`, if it exists.
    fn line_text(&self, row: usize) -> Option<&str>;
}

/// A document loaded from disk.
#[derive(Debug, Clone)]
pub struct FileDocument {
    display_path: String,
    text: String,
    grammar: String,
    lines: Vec<Range<usize>>,
}

/// Byte ranges of each line in `text`, excluding terminators.
///
/// `\r\n`, a lone `\r` and `\n` all end a line. A trailing terminator does
/// not start an empty final line.
pub fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                ranges.push(start..i);
                start = i + 1;
            }
            b'\r' => {
                ranges.push(start..i);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        ranges.push(start..bytes.len());
    }
    ranges
}

impl FileDocument {
    /// Read `path`, displaying it relative to `root` when possible.
    ///
    /// `grammar` overrides the scope otherwise guessed from the extension.
    pub fn open(path: &Path, root: &Path, grammar: Option<&str>) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let grammar = match grammar {
            Some(g) => g.to_string(),
            None => grammar_for_extension(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default(),
            )
            .to_string(),
        };
        let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let display_path = pathdiff::diff_paths(&abs, &root)
            .filter(|rel| !rel.starts_with(".."))
            .unwrap_or_else(|| path.to_path_buf())
            .to_string_lossy()
            .to_string();
        Ok(Self::from_parts(display_path, text, grammar))
    }

    pub fn from_parts(
        display_path: impl Into<String>,
        text: impl Into<String>,
        grammar: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let lines = line_ranges(&text);
        Self {
            display_path: display_path.into(),
            text,
            grammar: grammar.into(),
            lines,
        }
    }
}

impl Document for FileDocument {
    fn path(&self) -> &str {
        &self.display_path
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn grammar(&self) -> &str {
        &self.grammar
    }

    fn line_text(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|r| &self.text[r.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_guesses_grammar_and_relative_path() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("site")).unwrap();
        let file = root.join("site/index.html");
        fs::write(&file, "<!doctype html>\n<title>x</title>\n").unwrap();

        let doc = FileDocument::open(&file, root, None).unwrap();
        assert_eq!(doc.grammar(), "text.html.basic");
        assert_eq!(Path::new(doc.path()), Path::new("site/index.html"));
        assert_eq!(doc.line_text(1), Some("<title>x</title>"));
        assert_eq!(doc.line_text(5), None);
    }

    #[test]
    fn test_line_text_splits_on_every_terminator() {
        let doc = FileDocument::from_parts("a.html", "<p>one\r<b>two\r<i>three", "text.html.basic");
        assert_eq!(doc.line_text(1), Some("<b>two"));
        assert_eq!(doc.line_text(2), Some("<i>three"));

        let doc = FileDocument::from_parts("a.html", "one\r\ntwo\n\nfour\r\n", "text.html.basic");
        assert_eq!(doc.line_text(0), Some("one"));
        assert_eq!(doc.line_text(1), Some("two"));
        assert_eq!(doc.line_text(2), Some(""));
        assert_eq!(doc.line_text(3), Some("four"));
        assert_eq!(doc.line_text(4), None);
    }

    #[test]
    fn test_line_ranges_empty_text() {
        assert!(line_ranges("").is_empty());
        assert_eq!(line_ranges("\r\n"), vec![0..0]);
    }

    #[test]
    fn test_open_with_grammar_override() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("styles.txt");
        fs::write(&file, "a { color: red }").unwrap();
        let doc = FileDocument::open(&file, dir.path(), Some("source.css")).unwrap();
        assert_eq!(doc.grammar(), "source.css");
    }

    #[test]
    fn test_open_missing_file_errors() {
        let dir = tempdir().unwrap();
        let err = FileDocument::open(&dir.path().join("nope.css"), dir.path(), None);
        assert!(matches!(err, Err(AppError::ReadDocument { .. })));
    }
}
