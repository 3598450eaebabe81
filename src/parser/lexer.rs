//! Quote-aware line splitter for the slideshow DSL using logos

use logos::Logos;
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Delimiters used to split statements into keyword and arguments
pub const STATEMENT_DELIMITERS: &[char] = &[':', ',', ' ', '\t'];

/// Raw runs of a line: a quoted string, or anything between quotes
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Fragment {
    #[regex(r#""[^"]*""#)]
    Quoted,

    #[regex(r#"[^"]+"#)]
    Bare,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },
}

/// A trimmed token of a line, quotes included
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte range within the line
    pub span: Span,
}

/// Split a line into trimmed tokens.
///
/// Delimiter characters inside a pair of double quotes do not split. Tokens
/// that are empty after trimming are dropped.
pub fn split_line<'a>(line: &'a str, delimiters: &[char]) -> Result<Vec<Token<'a>>, LexError> {
    let mut tokens = Vec::new();
    let mut current: Option<Span> = None;

    for (fragment, span) in Fragment::lexer(line).spanned() {
        match fragment {
            Ok(Fragment::Quoted) => extend(&mut current, span),
            Ok(Fragment::Bare) => {
                for (i, c) in line[span.clone()].char_indices() {
                    let at = span.start + i;
                    if delimiters.contains(&c) {
                        flush(line, &mut current, &mut tokens);
                    } else {
                        extend(&mut current, at..at + c.len_utf8());
                    }
                }
            }
            Err(()) => return Err(LexError::UnterminatedString { offset: span.start }),
        }
    }
    flush(line, &mut current, &mut tokens);

    Ok(tokens)
}

fn extend(current: &mut Option<Span>, span: Span) {
    *current = Some(match current.take() {
        Some(open) => open.start..span.end,
        None => span,
    });
}

fn flush<'a>(line: &'a str, current: &mut Option<Span>, tokens: &mut Vec<Token<'a>>) {
    let Some(span) = current.take() else {
        return;
    };
    let raw = &line[span.clone()];
    let text = raw.trim();
    if text.is_empty() {
        return;
    }
    let start = span.start + (raw.len() - raw.trim_start().len());
    tokens.push(Token {
        text,
        span: start..start + text.len(),
    });
}

/// Remove one pair of surrounding double quotes, if present
pub fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// A source line worth parsing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offset of the line start within the source
    pub offset: usize,
    pub text: &'a str,
}

/// Iterate the lines of a source, skipping those with at most one
/// non-whitespace character
pub fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .filter_map(move |(index, raw)| {
            let start = offset;
            offset += raw.len();
            let text = raw.trim_end_matches(['\n', '\r']);
            if text.trim().chars().count() <= 1 {
                return None;
            }
            Some(SourceLine {
                number: index + 1,
                offset: start,
                text,
            })
        })
}
