//! Error types for the layout engine

use thiserror::Error;

use crate::error::{render_report, Span};

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A single word is wider than the box it has to wrap in
    #[error("word '{word}' is too wide for box '{box_name}' ({width:.3} > {available:.3})")]
    WordTooWide {
        word: String,
        box_name: String,
        /// 1-based source line of the text
        line: usize,
        /// Word width as a fraction of viewport width
        width: f64,
        /// Usable box width as a fraction of viewport width
        available: f64,
    },
}

impl LayoutError {
    /// Create a word-too-wide error
    pub fn word_too_wide(
        word: impl Into<String>,
        box_name: impl Into<String>,
        line: usize,
        width: f64,
        available: f64,
    ) -> Self {
        Self::WordTooWide {
            word: word.into(),
            box_name: box_name.into(),
            line,
            width,
            available,
        }
    }

    /// Source line the error refers to
    pub fn line(&self) -> usize {
        match self {
            Self::WordTooWide { line, .. } => *line,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = match self {
            Self::WordTooWide { word, line, .. } => {
                let line_span = line_span(source, *line);
                source[line_span.clone()]
                    .find(word.as_str())
                    .map(|at| line_span.start + at..line_span.start + at + word.len())
                    .unwrap_or(line_span)
            }
        };
        render_report(
            source,
            filename,
            span,
            &format!("Layout error on line {}", self.line()),
            &self.to_string(),
        )
    }
}

/// Byte range of a 1-based line, without its line terminator
fn line_span(source: &str, line: usize) -> Span {
    let mut start = 0;
    for (index, raw) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let text = raw.trim_end_matches(['\n', '\r']);
            return start..start + text.len();
        }
        start += raw.len();
    }
    source.len()..source.len()
}
