//! Error types for parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Malformed statement: bad quoting, argument count or argument kind
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unterminated string")]
    UnterminatedString,

    #[error("'{keyword}' expects {expected} argument(s) but got {found}")]
    ArgumentCount {
        keyword: String,
        expected: usize,
        found: usize,
    },

    #[error("argument {index} of '{keyword}' should be {expected}, found {found}")]
    ArgumentKind {
        keyword: String,
        /// 1-based
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unknown {category} '{found}' (expected one of: {})", accepted.join(", "))]
    UnknownVariant {
        category: &'static str,
        found: String,
        accepted: &'static [&'static str],
    },
}

/// Well-formed statement that does not fit the document being built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicError {
    #[error("unmatched end keyword")]
    UnmatchedEnd,

    #[error("'{keyword}' used outside of a slide")]
    NoOpenSlide { keyword: String },

    #[error("'{keyword}' used without a box defined; use define first")]
    NoFocusedBox { keyword: String },

    #[error("slide '{open}' is still open; close it with end before opening '{name}'")]
    SlideAlreadyOpen { open: String, name: String },

    #[error("slide '{name}' opened on line {opened_at} is never closed")]
    UnclosedSlide { name: String, opened_at: usize },

    #[error("couldn't find slide or template with name: {name}")]
    UnknownTemplate { name: String },

    #[error("couldn't find element with name: {name}")]
    UndefinedElement { name: String },

    #[error("'{name}' is a slide, not a box")]
    NotABox { name: String },

    #[error("slide '{name}' cannot define itself")]
    SelfReference { name: String },

    #[error("couldn't load image '{filename}': {reason}")]
    ImageDecode { filename: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("{0}")]
    Logic(#[from] LogicError),
}

/// A fatal parse failure tied to a source location
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Error on line {line} : {kind}")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// Absolute byte range into the source
    pub span: Span,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, span: Span, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            line,
            span,
            kind: kind.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax(_))
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let label = match &self.kind {
            ParseErrorKind::Syntax(e) => e.to_string(),
            ParseErrorKind::Logic(e) => e.to_string(),
        };
        render_report(
            source,
            filename,
            self.span.clone(),
            &format!("Error on line {}", self.line),
            &label,
        )
    }
}

/// Render a single-label ariadne report into a string
pub(crate) fn render_report(
    source: &str,
    filename: &str,
    span: Span,
    message: &str,
    label: &str,
) -> String {
    let mut buf = Vec::new();
    let span = span.start.min(source.len())..span.end.min(source.len());
    let written = Report::build(ReportKind::Error, filename, span.start)
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf);
    if written.is_err() {
        return format!("{}: {}", message, label);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
