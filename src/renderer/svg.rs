//! SVG generation from laid-out slides

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::assets::encode_png;
use crate::document::{Image, Slide};
use crate::layout::Viewport;
use crate::theme::Theme;

use super::canvas::{render_end_slide, render_slide, Canvas, DrawOptions, Rect, TextAnchor};
use super::SvgConfig;

/// Canvas that accumulates SVG markup
pub struct SvgCanvas {
    config: SvgConfig,
    viewport: Viewport,
    font_family: String,
    elements: Vec<String>,
}

impl SvgCanvas {
    /// Create a canvas of the given pixel size
    pub fn new(config: SvgConfig, viewport: Viewport, font_family: impl Into<String>) -> Self {
        Self {
            config,
            viewport,
            font_family: font_family.into(),
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn image_href(&self, image: &Image) -> String {
        if !self.config.embed_images {
            return escape_xml(&image.filename);
        }
        match encode_png(&image.data) {
            Ok(png) => format!("data:image/png;base64,{}", STANDARD.encode(png)),
            Err(e) => {
                log::warn!("cannot embed '{}': {}", image.filename, e);
                escape_xml(&image.filename)
            }
        }
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.viewport.width,
            h = self.viewport.height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, color: &str) {
        self.elements.clear();
        self.elements.push(format!(
            r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            self.prefix(),
            self.viewport.width,
            self.viewport.height,
            escape_xml(color)
        ));
    }

    fn draw_text(
        &mut self,
        content: &str,
        x: f64,
        y: f64,
        font_px: f64,
        anchor: TextAnchor,
        color: &str,
    ) {
        let anchor_str = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.elements.push(format!(
            r#"{}<text class="{}text" x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            self.prefix(),
            x,
            y,
            escape_xml(&self.font_family),
            font_px,
            anchor_str,
            escape_xml(color),
            escape_xml(content)
        ));
    }

    fn draw_image(&mut self, image: &Image, source: Rect, dest: Rect) {
        let href = self.image_href(image);
        self.elements.push(format!(
            r#"{}<svg class="{}image" x="{}" y="{}" width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="none"><image width="{}" height="{}" href="{}"/></svg>"#,
            self.indent_str(),
            self.prefix(),
            dest.x,
            dest.y,
            dest.width,
            dest.height,
            source.x,
            source.y,
            source.width,
            source.height,
            image.data.width,
            image.data.height,
            href
        ));
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str) {
        self.elements.push(format!(
            r#"{}<rect class="{}debug" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}"/>"#,
            self.indent_str(),
            self.prefix(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape_xml(color)
        ));
    }
}

/// Render a laid-out slide to an SVG document
pub fn render_svg(slide: &Slide, theme: &Theme, config: &SvgConfig, options: DrawOptions) -> String {
    let mut canvas = SvgCanvas::new(config.clone(), options.viewport, theme.fonts.family.clone());
    render_slide(&mut canvas, slide, theme, options);
    canvas.build()
}

/// Render the end-of-presentation frame to an SVG document
pub fn render_end_svg(theme: &Theme, config: &SvgConfig, viewport: Viewport) -> String {
    let mut canvas = SvgCanvas::new(config.clone(), viewport, theme.fonts.family.clone());
    render_end_slide(&mut canvas, theme, viewport);
    canvas.build()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FontSize, ImageData, SlideBox, SlideElement, StackType, Text, TextAlign};

    fn options() -> DrawOptions {
        DrawOptions {
            viewport: Viewport::new(200.0, 100.0),
            debug: false,
        }
    }

    fn slide_with(elements: Vec<SlideElement>) -> Slide {
        let mut b = SlideBox::new("B", StackType::Vertical, TextAlign::Left, 2);
        b.width = 1.0;
        b.height = 1.0;
        b.elements = elements;
        let mut slide = Slide::new("S", true, 1);
        slide.elements.push(SlideElement::Box(b));
        slide
    }

    fn image() -> Image {
        let mut image = Image::new(
            "pic.png",
            ImageData {
                pixels: vec![255; 2 * 2 * 4],
                width: 2,
                height: 2,
                channels: 4,
            },
            3,
        );
        image.rwidth = 0.5;
        image.rheight = 0.5;
        image
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_text_is_escaped_and_styled() {
        let slide = slide_with(vec![SlideElement::Text(Text::new(
            "Fish & <Chips>",
            FontSize::Normal,
            3,
        ))]);
        let svg = render_svg(&slide, &Theme::default(), &SvgConfig::default(), options());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(svg.contains(r#"font-family="Serif""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_images_embedded_as_data_uri() {
        let slide = slide_with(vec![SlideElement::Image(image())]);
        let svg = render_svg(&slide, &Theme::default(), &SvgConfig::default(), options());
        assert!(svg.contains(r#"href="data:image/png;base64,"#));
        assert!(svg.contains(r#"viewBox="0 0 2 2""#));
    }

    #[test]
    fn test_images_linked_when_not_embedded() {
        let slide = slide_with(vec![SlideElement::Image(image())]);
        let config = SvgConfig::default().with_embed_images(false);
        let svg = render_svg(&slide, &Theme::default(), &config, options());
        assert!(svg.contains(r#"href="pic.png""#));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix();
        let svg = render_end_svg(&Theme::default(), &config, Viewport::new(100.0, 50.0));
        insta::assert_snapshot!(svg, @r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50"><rect class="background" x="0" y="0" width="100" height="50" fill="#000000"/><text class="text" x="50" y="26.05" font-family="Serif" font-size="3" text-anchor="middle" fill="#ffffff">End of presentation.</text></svg>"##);
    }
}
