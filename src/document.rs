//! Element tree for a parsed slideshow
//!
//! The parser builds this tree top-down and the layout engine annotates it in
//! place with normalized geometry. Every element is exclusively owned by its
//! parent container; cloning an element deep-copies the whole subtree.

use std::fmt;

/// Relative font size of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Huge,
    Title,
    Normal,
    Small,
}

impl FontSize {
    pub const KEYWORDS: &'static [&'static str] = &["huge", "title", "normal", "small"];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "huge" => Some(FontSize::Huge),
            "title" => Some(FontSize::Title),
            "normal" => Some(FontSize::Normal),
            "small" => Some(FontSize::Small),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            FontSize::Huge => "huge",
            FontSize::Title => "title",
            FontSize::Normal => "normal",
            FontSize::Small => "small",
        }
    }
}

/// Axis along which sibling boxes are packed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackType {
    Vertical,
    Horizontal,
}

impl StackType {
    pub const KEYWORDS: &'static [&'static str] = &["stack-vertical", "stack-horizontal"];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "stack-vertical" => Some(StackType::Vertical),
            "stack-horizontal" => Some(StackType::Horizontal),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            StackType::Vertical => "stack-vertical",
            StackType::Horizontal => "stack-horizontal",
        }
    }
}

/// Horizontal alignment of the elements inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const KEYWORDS: &'static [&'static str] = &["align-left", "align-center", "align-right"];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "align-left" => Some(TextAlign::Left),
            "align-center" => Some(TextAlign::Center),
            "align-right" => Some(TextAlign::Right),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            TextAlign::Left => "align-left",
            TextAlign::Center => "align-center",
            TextAlign::Right => "align-right",
        }
    }
}

/// Any node of the slide tree
#[derive(Debug, Clone, PartialEq)]
pub enum SlideElement {
    Slide(Slide),
    Box(SlideBox),
    Text(Text),
    Image(Image),
}

impl SlideElement {
    /// Short kind name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            SlideElement::Slide(_) => "slide",
            SlideElement::Box(_) => "box",
            SlideElement::Text(_) => "text",
            SlideElement::Image(_) => "image",
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            SlideElement::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&SlideBox> {
        match self {
            SlideElement::Box(b) => Some(b),
            _ => None,
        }
    }
}

/// A slide or template
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub name: String,
    /// False for templates, which are only reachable through `uses`
    pub visible: bool,
    pub elements: Vec<SlideElement>,
    /// 1-based source line of the opening statement
    pub line: usize,
}

impl Slide {
    pub fn new(name: impl Into<String>, visible: bool, line: usize) -> Self {
        Self {
            name: name.into(),
            visible,
            elements: Vec::new(),
            line,
        }
    }

    /// Direct box children, in document order
    pub fn boxes(&self) -> impl Iterator<Item = &SlideBox> {
        self.elements.iter().filter_map(SlideElement::as_box)
    }

    /// Nested slides spliced in by `uses`
    pub fn nested(&self) -> impl Iterator<Item = &Slide> {
        self.elements.iter().filter_map(|e| match e {
            SlideElement::Slide(s) => Some(s),
            _ => None,
        })
    }

    /// First text run in document order, descending into nested slides
    pub fn top_text(&self) -> Option<&str> {
        for element in &self.elements {
            match element {
                SlideElement::Slide(nested) => {
                    if let Some(text) = nested.top_text() {
                        return Some(text);
                    }
                }
                SlideElement::Box(b) => {
                    if let Some(text) = b.elements.iter().find_map(SlideElement::as_text) {
                        return Some(&text.content);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// A rectangular layout region holding text and images
#[derive(Debug, Clone, PartialEq)]
pub struct SlideBox {
    pub name: String,
    pub stack: StackType,
    pub align: TextAlign,
    pub elements: Vec<SlideElement>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub line: usize,
}

impl SlideBox {
    pub fn new(name: impl Into<String>, stack: StackType, align: TextAlign, line: usize) -> Self {
        Self {
            name: name.into(),
            stack,
            align,
            elements: Vec::new(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            line,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.elements.iter().filter_map(SlideElement::as_text)
    }
}

/// A single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub font_size: FontSize,
    /// Box-relative horizontal start
    pub x: f64,
    /// Box-relative baseline
    pub y: f64,
    /// Font pixel size as a fraction of viewport width
    pub size: f64,
    pub line: usize,
}

impl Text {
    pub fn new(content: impl Into<String>, font_size: FontSize, line: usize) -> Self {
        Self {
            content: content.into(),
            font_size,
            x: 0.0,
            y: 0.0,
            size: 0.0,
            line,
        }
    }
}

/// Decoded raster data
#[derive(Clone, PartialEq)]
pub struct ImageData {
    /// RGBA8, row-major
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channel count of the source file (the buffer is always RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Width divided by height, or 1.0 for degenerate images
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// An image placed inside a box
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub filename: String,
    pub data: ImageData,
    pub x: f64,
    pub y: f64,
    /// Render width relative to the box width
    pub rwidth: f64,
    /// Render height relative to the box height
    pub rheight: f64,
    pub line: usize,
}

impl Image {
    pub fn new(filename: impl Into<String>, data: ImageData, line: usize) -> Self {
        Self {
            filename: filename.into(),
            data,
            x: 0.0,
            y: 0.0,
            rwidth: 0.0,
            rheight: 0.0,
            line,
        }
    }
}

/// All top-level slides and templates, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideList {
    pub slides: Vec<Slide>,
}

impl SlideList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Slides shown in the presentation (templates excluded)
    pub fn visible(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(|s| s.visible)
    }

    /// Render an indented outline of the tree with its geometry
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for slide in &self.slides {
            outline_slide(slide, 0, &mut out);
        }
        out
    }
}

fn outline_slide(slide: &Slide, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let kind = if slide.visible { "slide" } else { "template" };
    out.push_str(&format!("{}{} \"{}\"\n", indent, kind, slide.name));
    for element in &slide.elements {
        match element {
            SlideElement::Slide(nested) => outline_slide(nested, depth + 1, out),
            SlideElement::Box(b) => {
                out.push_str(&format!(
                    "{}  box \"{}\" {} {} x={:.3} y={:.3} w={:.3} h={:.3}\n",
                    indent,
                    b.name,
                    b.stack.keyword(),
                    b.align.keyword(),
                    b.x,
                    b.y,
                    b.width,
                    b.height
                ));
                for child in &b.elements {
                    match child {
                        SlideElement::Text(t) => out.push_str(&format!(
                            "{}    text {} \"{}\" x={:.3} y={:.3}\n",
                            indent,
                            t.font_size.keyword(),
                            t.content,
                            t.x,
                            t.y
                        )),
                        SlideElement::Image(i) => out.push_str(&format!(
                            "{}    image \"{}\" {}x{} x={:.3} y={:.3} w={:.3} h={:.3}\n",
                            indent,
                            i.filename,
                            i.data.width,
                            i.data.height,
                            i.x,
                            i.y,
                            i.rwidth,
                            i.rheight
                        )),
                        other => out.push_str(&format!("{}    {}\n", indent, other.kind())),
                    }
                }
            }
            other => out.push_str(&format!("{}  {}\n", indent, other.kind())),
        }
    }
}

impl<'a> IntoIterator for &'a SlideList {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
