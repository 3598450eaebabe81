//! Parser for the slideshow DSL
//!
//! Source text is processed line by line: [`lexer`] splits each line into
//! tokens, [`syntax`] checks them against the keyword's signature, and
//! [`builder`] assembles the slide tree.

pub mod builder;
pub mod lexer;
pub mod syntax;

pub use builder::parse;
pub use lexer::{source_lines, split_line, strip_quotes, Span, Token};
