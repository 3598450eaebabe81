//! Slide sequencing: which frame is shown and what the window is titled

use crate::document::{Slide, SlideList};

/// Title shown once the last slide has been passed
pub const END_TITLE: &str = "End of Presentation.";

/// Message drawn on the end frame
pub const END_MESSAGE: &str = "End of presentation.";

/// What the presentation currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame<'a> {
    Slide(&'a Slide),
    End,
}

/// Cursor over the visible slides of a list, followed by the end frame.
///
/// Only top-level indices are stored, so the same cursor stays valid for a
/// re-laid-out copy of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    order: Vec<usize>,
    /// Position in `order`; `order.len()` is the end frame
    cursor: usize,
}

impl Presentation {
    /// Start at the first visible slide, or at the end frame if there is none
    pub fn new(list: &SlideList) -> Self {
        let order = list
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.visible)
            .map(|(index, _)| index)
            .collect();
        Self { order, cursor: 0 }
    }

    /// Number of visible slides
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Index of the current slide in the list, `None` on the end frame
    pub fn slide_index(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// 0-based position among the visible slides
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current<'a>(&self, list: &'a SlideList) -> Frame<'a> {
        match self.slide_index().and_then(|index| list.get(index)) {
            Some(slide) => Frame::Slide(slide),
            None => Frame::End,
        }
    }

    /// Advance to the next visible slide or the end frame. Returns false when
    /// already on the end frame.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step back to the previous visible slide. Returns false when already on
    /// the first one.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.cursor.min(self.order.len()) - 1;
        true
    }

    /// Window title for the current frame: the first text of the slide, or
    /// its name when it has no text
    pub fn title(&self, list: &SlideList) -> String {
        match self.current(list) {
            Frame::Slide(slide) => slide.top_text().unwrap_or(&slide.name).to_string(),
            Frame::End => END_TITLE.to_string(),
        }
    }
}
