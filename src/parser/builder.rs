//! Keyword-driven construction of the slide tree

use crate::assets::ImageDecoder;
use crate::document::{Image, Slide, SlideBox, SlideElement, SlideList, Text};
use crate::error::{LogicError, ParseError, ParseErrorKind, Span, SyntaxError};
use crate::template::{self, BoxPath};

use super::lexer::{self, SourceLine, Token, STATEMENT_DELIMITERS};
use super::syntax::{self, Keyword};

/// Parse a slideshow source into its list of slides and templates.
///
/// Images are decoded as they are encountered. Parsing stops at the first
/// error.
pub fn parse(source: &str, images: &dyn ImageDecoder) -> Result<SlideList, ParseError> {
    let mut builder = Builder::new(images);
    for line in lexer::source_lines(source) {
        builder.statement(&line)?;
    }
    builder.finish()
}

/// The slide being built and the box statements currently write into
struct OpenSlide {
    slide: Slide,
    span: Span,
    focus: Option<BoxPath>,
}

struct Builder<'d> {
    list: SlideList,
    open: Option<OpenSlide>,
    images: &'d dyn ImageDecoder,
}

/// One tokenized line with helpers for absolute spans
struct Statement<'a> {
    line: usize,
    offset: usize,
    tokens: Vec<Token<'a>>,
}

impl Statement<'_> {
    fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => self.offset + first.span.start..self.offset + last.span.end,
            _ => self.offset..self.offset,
        }
    }

    /// Span of the n-th argument after the keyword
    fn arg_span(&self, n: usize) -> Span {
        self.tokens
            .get(n + 1)
            .map(|t| self.offset + t.span.start..self.offset + t.span.end)
            .unwrap_or_else(|| self.span())
    }

    fn arg(&self, n: usize) -> &str {
        self.tokens.get(n + 1).map(|t| t.text).unwrap_or_default()
    }

    fn keyword(&self) -> String {
        self.tokens
            .first()
            .map(|t| t.text.to_string())
            .unwrap_or_default()
    }

    fn name(&self) -> &str {
        lexer::strip_quotes(self.arg(0))
    }

    fn error(&self, kind: impl Into<ParseErrorKind>) -> ParseError {
        ParseError::new(self.line, self.span(), kind)
    }

    fn arg_error(&self, n: usize, kind: impl Into<ParseErrorKind>) -> ParseError {
        ParseError::new(self.line, self.arg_span(n), kind)
    }
}

impl<'d> Builder<'d> {
    fn new(images: &'d dyn ImageDecoder) -> Self {
        Self {
            list: SlideList::new(),
            open: None,
            images,
        }
    }

    fn statement(&mut self, line: &SourceLine<'_>) -> Result<(), ParseError> {
        let tokens = lexer::split_line(line.text, STATEMENT_DELIMITERS).map_err(|e| {
            let lexer::LexError::UnterminatedString { offset } = e;
            let at = line.offset + offset;
            ParseError::new(line.number, at..at + 1, SyntaxError::UnterminatedString)
        })?;
        let stmt = Statement {
            line: line.number,
            offset: line.offset,
            tokens,
        };
        let Some(first) = stmt.tokens.first() else {
            return Ok(());
        };
        let Some(keyword) = Keyword::from_token(first.text) else {
            log::warn!("line {}: ignoring unknown keyword '{}'", stmt.line, first.text);
            return Ok(());
        };

        if let Some(signature) = keyword.signature() {
            syntax::check(keyword.as_str(), &stmt.tokens[1..], signature).map_err(
                |(index, err)| match index {
                    Some(n) => stmt.arg_error(n, err),
                    None => stmt.error(err),
                },
            )?;
        }

        match keyword {
            Keyword::Slide => self.open_slide(&stmt, true),
            Keyword::Template => self.open_slide(&stmt, false),
            Keyword::Box => self.add_box(&stmt),
            Keyword::Uses => self.uses(&stmt),
            Keyword::Text => self.add_text(&stmt),
            Keyword::Image => self.add_image(&stmt),
            Keyword::Define => self.define(&stmt),
            Keyword::End => self.end(&stmt),
        }
    }

    fn open_slide(&mut self, stmt: &Statement<'_>, visible: bool) -> Result<(), ParseError> {
        if let Some(open) = &self.open {
            return Err(stmt.error(LogicError::SlideAlreadyOpen {
                open: open.slide.name.clone(),
                name: stmt.name().to_string(),
            }));
        }
        self.open = Some(OpenSlide {
            slide: Slide::new(stmt.name(), visible, stmt.line),
            span: stmt.span(),
            focus: None,
        });
        Ok(())
    }

    fn open_slide_mut(&mut self, stmt: &Statement<'_>) -> Result<&mut OpenSlide, ParseError> {
        self.open.as_mut().ok_or_else(|| {
            stmt.error(LogicError::NoOpenSlide {
                keyword: stmt.keyword(),
            })
        })
    }

    /// The box `text` and `image` statements write into
    fn focused_box(&mut self, stmt: &Statement<'_>) -> Result<&mut SlideBox, ParseError> {
        let no_focus = || {
            stmt.error(LogicError::NoFocusedBox {
                keyword: stmt.keyword(),
            })
        };
        let open = self.open.as_mut().ok_or_else(no_focus)?;
        let path = open.focus.as_ref().ok_or_else(no_focus)?;
        template::box_at_mut(&mut open.slide, path).ok_or_else(no_focus)
    }

    fn add_box(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        let stack = syntax::parse_stack(stmt.arg(1)).map_err(|e| stmt.arg_error(1, e))?;
        let align = syntax::parse_align(stmt.arg(2)).map_err(|e| stmt.arg_error(2, e))?;
        let b = SlideBox::new(stmt.name(), stack, align, stmt.line);
        self.open_slide_mut(stmt)?
            .slide
            .elements
            .push(SlideElement::Box(b));
        Ok(())
    }

    fn uses(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        self.open_slide_mut(stmt)?;
        let copy = template::resolve_uses(&self.list, stmt.name()).map_err(|e| stmt.arg_error(0, e))?;
        log::debug!("line {}: using '{}'", stmt.line, copy.name);
        self.open_slide_mut(stmt)?
            .slide
            .elements
            .push(SlideElement::Slide(copy));
        Ok(())
    }

    fn add_text(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        let size = syntax::parse_font_size(stmt.arg(0)).map_err(|e| stmt.arg_error(0, e))?;
        let content = lexer::strip_quotes(stmt.arg(1));
        let text = Text::new(content, size, stmt.line);
        self.focused_box(stmt)?
            .elements
            .push(SlideElement::Text(text));
        Ok(())
    }

    fn add_image(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        // Check the focus before paying for the decode
        self.focused_box(stmt)?;
        let filename = stmt.name();
        let data = self.images.decode(filename).map_err(|e| {
            stmt.arg_error(
                0,
                LogicError::ImageDecode {
                    filename: filename.to_string(),
                    reason: e.to_string(),
                },
            )
        })?;
        let image = Image::new(filename, data, stmt.line);
        self.focused_box(stmt)?
            .elements
            .push(SlideElement::Image(image));
        Ok(())
    }

    fn define(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        let name = stmt.name();
        let open = self.open_slide_mut(stmt)?;
        let path = template::find_box(&open.slide, name).map_err(|e| stmt.arg_error(0, e))?;
        open.focus = Some(path);
        Ok(())
    }

    fn end(&mut self, stmt: &Statement<'_>) -> Result<(), ParseError> {
        match self.open.take() {
            Some(mut open) if open.focus.is_some() => {
                open.focus = None;
                self.open = Some(open);
                Ok(())
            }
            Some(open) => {
                log::debug!(
                    "parsed {} '{}' with {} element(s)",
                    if open.slide.visible { "slide" } else { "template" },
                    open.slide.name,
                    open.slide.elements.len()
                );
                self.list.push(open.slide);
                Ok(())
            }
            None => Err(stmt.error(LogicError::UnmatchedEnd)),
        }
    }

    fn finish(self) -> Result<SlideList, ParseError> {
        if let Some(open) = self.open {
            return Err(ParseError::new(
                open.slide.line,
                open.span,
                LogicError::UnclosedSlide {
                    name: open.slide.name,
                    opened_at: open.slide.line,
                },
            ));
        }
        Ok(self.list)
    }
}
