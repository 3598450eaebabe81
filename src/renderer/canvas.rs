//! Drawing surface abstraction and the slide walk that drives it

use crate::document::{Image, Slide, SlideBox, SlideElement};
use crate::layout::Viewport;
use crate::presentation::END_MESSAGE;
use crate::theme::Theme;

/// Share of the viewport width used as font size on the end frame
const END_FONT_RATIO: f64 = 0.03;

/// Approximate ink height of a line relative to its font size
const CAP_HEIGHT_RATIO: f64 = 0.7;

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A surface slides can be drawn on
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: &str);

    /// Draw a line of text with its baseline at `y`
    fn draw_text(
        &mut self,
        content: &str,
        x: f64,
        y: f64,
        font_px: f64,
        anchor: TextAnchor,
        color: &str,
    );

    /// Draw the `source` part of an image scaled into `dest`
    fn draw_image(&mut self, image: &Image, source: Rect, dest: Rect);

    /// Outline a rectangle. Only used for debug output.
    fn stroke_rect(&mut self, _rect: Rect, _color: &str) {}
}

/// Options for drawing slides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    pub viewport: Viewport,
    /// Outline every box
    pub debug: bool,
}

/// Clear the canvas and draw a laid-out slide
pub fn render_slide(canvas: &mut dyn Canvas, slide: &Slide, theme: &Theme, options: DrawOptions) {
    canvas.clear(&theme.colors.background);
    draw_slide(canvas, slide, theme, options);
}

/// Boxes and nested slides are drawn in document order, nested slides on
/// top of whatever precedes them
fn draw_slide(canvas: &mut dyn Canvas, slide: &Slide, theme: &Theme, options: DrawOptions) {
    for element in &slide.elements {
        match element {
            SlideElement::Box(b) => draw_box(canvas, b, theme, options),
            SlideElement::Slide(nested) => draw_slide(canvas, nested, theme, options),
            _ => {}
        }
    }
}

fn draw_box(canvas: &mut dyn Canvas, b: &SlideBox, theme: &Theme, options: DrawOptions) {
    let vp = options.viewport;
    let area = Rect::new(
        b.x * vp.width,
        b.y * vp.height,
        b.width * vp.width,
        b.height * vp.height,
    );
    if options.debug {
        canvas.stroke_rect(area, "#ff0000");
    }

    for element in &b.elements {
        match element {
            SlideElement::Text(text) => canvas.draw_text(
                &text.content,
                area.x + text.x * area.width,
                area.y + text.y * area.height,
                text.size * vp.width,
                TextAnchor::Start,
                &theme.colors.text,
            ),
            SlideElement::Image(image) => {
                let source = Rect::new(0.0, 0.0, image.data.width as f64, image.data.height as f64);
                let dest = Rect::new(
                    area.x + image.x * area.width,
                    area.y + image.y * area.height,
                    image.rwidth * area.width,
                    image.rheight * area.height,
                );
                canvas.draw_image(image, source, dest);
            }
            _ => {}
        }
    }
}

/// Draw the frame shown after the last slide
pub fn render_end_slide(canvas: &mut dyn Canvas, theme: &Theme, viewport: Viewport) {
    let font_px = END_FONT_RATIO * viewport.width;
    canvas.clear(&theme.colors.end_background);
    canvas.draw_text(
        END_MESSAGE,
        viewport.width / 2.0,
        (viewport.height + font_px * CAP_HEIGHT_RATIO) / 2.0,
        font_px,
        TextAnchor::Middle,
        &theme.colors.end_text,
    );
}
