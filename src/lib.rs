//! illuscribe - slideshows from a small plaintext language
//!
//! This library provides the parser, layout engine and renderer for
//! illuscribe decks.
//!
//! # Example
//!
//! ```rust
//! use illuscribe::{render, FileDecoder};
//!
//! let show = render(
//!     r#"
//! slide "Intro"
//! box "Title", stack-vertical, align-center
//! define "Title"
//! text title "Hello"
//! end
//! end
//! "#,
//!     &FileDecoder::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(show.slides.len(), 1);
//! assert_eq!(show.slides[0].title, "Hello");
//! assert!(show.slides[0].svg.contains("Hello"));
//! ```

pub mod assets;
pub mod document;
pub mod error;
pub mod layout;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod renderer;
pub mod template;
pub mod theme;

pub use assets::{DecodeError, FileDecoder, ImageDecoder};
pub use document::{FontSize, Image, ImageData, Slide, SlideBox, SlideElement, SlideList, StackType, Text, TextAlign};
pub use error::{LogicError, ParseError, ParseErrorKind, SyntaxError};
pub use layout::{FontMetrics, LayoutConfig, LayoutError, MonospaceMetrics, Viewport};
pub use parser::parse;
pub use presentation::{Frame, Presentation};
pub use renderer::{Canvas, DrawOptions, SvgConfig};
pub use theme::{Theme, ThemeError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum ShowError {
    /// Error during parsing
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error loading the theme or its font
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),
}

impl ShowError {
    /// Format the error, with source context where it has a location
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ShowError::Parse(e) => e.format(source, filename),
            ShowError::Layout(e) => e.format(source, filename),
            ShowError::Theme(e) => format!("Error: {}\n", e),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Fonts and colors
    pub theme: Theme,
    /// Debug mode: outline boxes and print the laid-out tree
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the viewport size in pixels
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.layout = self.layout.with_viewport(width, height);
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the theme. Its spacing replaces the current layout padding and
    /// image scale.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.layout = theme.apply_to(self.layout);
        self.theme = theme;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            viewport: self.layout.viewport,
            debug: self.debug,
        }
    }
}

/// One rendered frame of a presentation
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub name: String,
    pub title: String,
    pub svg: String,
}

/// Every visible slide in order, followed by the end frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedShow {
    pub slides: Vec<RenderedSlide>,
    pub end: RenderedSlide,
}

/// A parsed deck laid out for one viewport size.
///
/// The parsed tree is kept untouched; every layout works on a fresh copy, so
/// wrapping done for a narrow viewport never leaks into a wider one.
pub struct Slideshow {
    pristine: SlideList,
    slides: SlideList,
    config: RenderConfig,
    metrics: Box<dyn FontMetrics>,
    presentation: Presentation,
}

impl Slideshow {
    /// Lay out a parsed deck, measuring text with the theme's metrics
    pub fn new(pristine: SlideList, config: RenderConfig) -> Result<Self, ShowError> {
        let metrics = config.theme.metrics()?;
        Ok(Self::with_metrics(pristine, config, metrics)?)
    }

    /// Lay out a parsed deck with explicit metrics
    pub fn with_metrics(
        pristine: SlideList,
        config: RenderConfig,
        metrics: Box<dyn FontMetrics>,
    ) -> Result<Self, LayoutError> {
        let mut slides = pristine.clone();
        layout::apply(&mut slides, metrics.as_ref(), &config.layout)?;
        let presentation = Presentation::new(&slides);
        let show = Self {
            pristine,
            slides,
            config,
            metrics,
            presentation,
        };
        if show.config.debug {
            show.print_debug();
        }
        Ok(show)
    }

    /// Parse and lay out a deck
    pub fn from_source(
        source: &str,
        images: &dyn ImageDecoder,
        config: RenderConfig,
    ) -> Result<Self, ShowError> {
        let list = parse(source, images)?;
        Self::new(list, config)
    }

    pub fn viewport(&self) -> Viewport {
        self.config.layout.viewport
    }

    /// The laid-out slides
    pub fn slides(&self) -> &SlideList {
        &self.slides
    }

    /// The slides as parsed, without geometry
    pub fn pristine(&self) -> &SlideList {
        &self.pristine
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Lay the deck out again for a new viewport size. Returns false when
    /// the size is unchanged and nothing was done.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, LayoutError> {
        if self.viewport() == Viewport::new(width, height) {
            return Ok(false);
        }
        let layout = self.config.layout.clone().with_viewport(width, height);
        let mut slides = self.pristine.clone();
        layout::apply(&mut slides, self.metrics.as_ref(), &layout)?;
        self.slides = slides;
        self.config.layout = layout;
        log::debug!("resized to {}x{}", width, height);
        if self.config.debug {
            self.print_debug();
        }
        Ok(true)
    }

    pub fn current(&self) -> Frame<'_> {
        self.presentation.current(&self.slides)
    }

    /// Move to the next frame
    pub fn next(&mut self) -> bool {
        self.presentation.next()
    }

    /// Move to the previous frame
    pub fn previous(&mut self) -> bool {
        self.presentation.previous()
    }

    /// Window title for the current frame
    pub fn title(&self) -> String {
        self.presentation.title(&self.slides)
    }

    /// Draw the current frame
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.current() {
            Frame::Slide(slide) => renderer::render_slide(
                canvas,
                slide,
                &self.config.theme,
                self.config.draw_options(),
            ),
            Frame::End => renderer::render_end_slide(canvas, &self.config.theme, self.viewport()),
        }
    }

    /// Render the current frame to SVG
    pub fn render_svg(&self) -> String {
        match self.current() {
            Frame::Slide(slide) => renderer::render_svg(
                slide,
                &self.config.theme,
                &self.config.svg,
                self.config.draw_options(),
            ),
            Frame::End => renderer::render_end_svg(&self.config.theme, &self.config.svg, self.viewport()),
        }
    }

    /// Render every frame of the presentation, from the first slide
    pub fn render_all(&self) -> RenderedShow {
        let mut cursor = Presentation::new(&self.slides);
        let mut slides = Vec::new();
        while let Frame::Slide(slide) = cursor.current(&self.slides) {
            slides.push(RenderedSlide {
                name: slide.name.clone(),
                title: cursor.title(&self.slides),
                svg: renderer::render_svg(
                    slide,
                    &self.config.theme,
                    &self.config.svg,
                    self.config.draw_options(),
                ),
            });
            cursor.next();
        }
        let end = RenderedSlide {
            name: String::new(),
            title: presentation::END_TITLE.to_string(),
            svg: renderer::render_end_svg(&self.config.theme, &self.config.svg, self.viewport()),
        };
        RenderedShow { slides, end }
    }

    /// Indented outline of the laid-out tree
    pub fn outline(&self) -> String {
        self.slides.outline()
    }

    fn print_debug(&self) {
        eprintln!("=== Layout Debug ===");
        eprint!("{}", self.outline());
        for path in layout::overflowing_boxes(&self.slides) {
            eprintln!("overflow: {}", path);
        }
        eprintln!("====================");
    }
}

/// Render DSL source with default configuration
pub fn render(source: &str, images: &dyn ImageDecoder) -> Result<RenderedShow, ShowError> {
    render_with_config(source, images, RenderConfig::default())
}

/// Render DSL source with custom configuration
///
/// # Example
///
/// ```rust
/// use illuscribe::{render_with_config, FileDecoder, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_viewport(400.0, 300.0)
///     .with_svg(SvgConfig::default().with_standalone(false));
///
/// let show = render_with_config("template \"T\"\nend\n", &FileDecoder::new(), config).unwrap();
/// assert!(show.slides.is_empty());
/// assert!(show.end.svg.contains("End of presentation."));
/// ```
pub fn render_with_config(
    source: &str,
    images: &dyn ImageDecoder,
    config: RenderConfig,
) -> Result<RenderedShow, ShowError> {
    let show = Slideshow::from_source(source, images, config)?;
    Ok(show.render_all())
}
