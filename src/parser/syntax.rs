//! Per-keyword argument signatures and their validation

use crate::document::{FontSize, StackType, TextAlign};
use crate::error::SyntaxError;

use super::lexer::Token;

/// Kind of a single statement argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Wrapped in a pair of double quotes
    String,
    /// Optional sign followed by ASCII digits
    Int,
    /// Like `Int` without a leading minus
    UInt,
    /// Anything that is neither a string nor an integer
    Identifier,
}

impl ArgKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ArgKind::String => "a quoted string",
            ArgKind::Int => "an integer",
            ArgKind::UInt => "an unsigned integer",
            ArgKind::Identifier => "an identifier",
        }
    }

    pub fn accepts(&self, token: &str) -> bool {
        match self {
            ArgKind::String => is_quoted(token),
            ArgKind::Int => is_integer(token),
            ArgKind::UInt => is_integer(token) && !token.starts_with('-'),
            ArgKind::Identifier => !is_quoted(token) && !is_integer(token),
        }
    }
}

fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Statement keywords of the DSL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Slide,
    Template,
    Box,
    Uses,
    Text,
    Image,
    Define,
    End,
}

impl Keyword {
    /// Classify the first token of a statement.
    ///
    /// Any otherwise unknown token containing `end` closes a scope, so
    /// `end`, `endslide` and `end-box` are all accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        let keyword = match token {
            "slide" => Keyword::Slide,
            "template" => Keyword::Template,
            "box" => Keyword::Box,
            "uses" => Keyword::Uses,
            "text" => Keyword::Text,
            "image" => Keyword::Image,
            "define" => Keyword::Define,
            other if other.contains("end") => Keyword::End,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Slide => "slide",
            Keyword::Template => "template",
            Keyword::Box => "box",
            Keyword::Uses => "uses",
            Keyword::Text => "text",
            Keyword::Image => "image",
            Keyword::Define => "define",
            Keyword::End => "end",
        }
    }

    /// Expected arguments after the keyword, or `None` when unchecked
    pub fn signature(&self) -> Option<&'static [ArgKind]> {
        const NAME: &[ArgKind] = &[ArgKind::String];
        const BOX: &[ArgKind] = &[ArgKind::String, ArgKind::Identifier, ArgKind::Identifier];
        const TEXT: &[ArgKind] = &[ArgKind::Identifier, ArgKind::String];
        match self {
            Keyword::Slide | Keyword::Template | Keyword::Uses | Keyword::Image | Keyword::Define => {
                Some(NAME)
            }
            Keyword::Box => Some(BOX),
            Keyword::Text => Some(TEXT),
            Keyword::End => None,
        }
    }
}

/// Validate arguments against a signature.
///
/// On failure the index of the offending argument is returned alongside the
/// error, or `None` for a count mismatch.
pub fn check(
    keyword: &str,
    args: &[Token<'_>],
    signature: &[ArgKind],
) -> Result<(), (Option<usize>, SyntaxError)> {
    if args.len() != signature.len() {
        return Err((
            None,
            SyntaxError::ArgumentCount {
                keyword: keyword.to_string(),
                expected: signature.len(),
                found: args.len(),
            },
        ));
    }
    for (index, (arg, kind)) in args.iter().zip(signature).enumerate() {
        if !kind.accepts(arg.text) {
            return Err((
                Some(index),
                SyntaxError::ArgumentKind {
                    keyword: keyword.to_string(),
                    index: index + 1,
                    expected: kind.describe(),
                    found: arg.text.to_string(),
                },
            ));
        }
    }
    Ok(())
}

pub fn parse_font_size(token: &str) -> Result<FontSize, SyntaxError> {
    FontSize::from_keyword(token).ok_or_else(|| SyntaxError::UnknownVariant {
        category: "font size",
        found: token.to_string(),
        accepted: FontSize::KEYWORDS,
    })
}

pub fn parse_stack(token: &str) -> Result<StackType, SyntaxError> {
    StackType::from_keyword(token).ok_or_else(|| SyntaxError::UnknownVariant {
        category: "stack type",
        found: token.to_string(),
        accepted: StackType::KEYWORDS,
    })
}

pub fn parse_align(token: &str) -> Result<TextAlign, SyntaxError> {
    TextAlign::from_keyword(token).ok_or_else(|| SyntaxError::UnknownVariant {
        category: "alignment",
        found: token.to_string(),
        accepted: TextAlign::KEYWORDS,
    })
}
