//! Placement of text runs and images inside a sized box

use crate::document::{SlideBox, SlideElement, TextAlign};

use super::{FontMetrics, LayoutConfig};

/// Horizontal start of an element of normalized `width` inside a box
fn aligned_x(align: TextAlign, width: f64, pad_x: f64) -> f64 {
    match align {
        TextAlign::Left => pad_x,
        TextAlign::Center => 0.5 - width / 2.0,
        TextAlign::Right => 1.0 - width - pad_x,
    }
}

/// Assign box-relative coordinates to every element of a box.
///
/// Elements stack top to bottom from the top padding. A box holding a single
/// element centers it vertically instead.
pub fn position_elements(b: &mut SlideBox, metrics: &dyn FontMetrics, config: &LayoutConfig) {
    let vp = config.viewport;
    let box_w_px = (b.width * vp.width).max(1.0);
    let box_h_px = (b.height * vp.height).max(1.0);
    let pad_x = config.padding_px() / box_w_px;
    let pad_y = config.padding_px() / box_h_px;
    let box_aspect = box_w_px / box_h_px;
    let lone = b.elements.len() == 1;
    let align = b.align;

    let mut cursor = pad_y;
    for element in &mut b.elements {
        match element {
            SlideElement::Text(text) => {
                let line_height = metrics.line_height(text.font_size, box_h_px);
                let ascent = metrics.ascent(text.font_size, box_h_px);
                let width = metrics.string_width(&text.content, text.font_size) / box_w_px;
                text.x = aligned_x(align, width, pad_x);
                if lone {
                    text.y = 0.5 - line_height / 2.0 + ascent;
                } else {
                    text.y = cursor + ascent;
                    cursor += line_height;
                }
            }
            SlideElement::Image(image) => {
                let aspect = image.data.aspect_ratio();
                image.rwidth = config.image_scale;
                image.rheight = image.rwidth / aspect * box_aspect;
                let remaining = (1.0 - cursor).max(0.0);
                if image.rheight > remaining {
                    image.rheight = remaining;
                    image.rwidth = image.rheight * aspect / box_aspect;
                }
                image.x = aligned_x(align, image.rwidth, pad_x);
                if lone {
                    image.y = 0.5 - image.rheight / 2.0;
                } else {
                    image.y = cursor;
                    cursor += image.rheight;
                }
            }
            SlideElement::Box(_) | SlideElement::Slide(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FontSize, Image, ImageData, StackType, Text};
    use crate::layout::MonospaceMetrics;

    const EPS: f64 = 1e-9;

    // 200x100 viewport, 5px padding
    fn config() -> LayoutConfig {
        LayoutConfig::new().with_viewport(200.0, 100.0)
    }

    fn sized_box(align: TextAlign, width: f64, height: f64) -> SlideBox {
        let mut b = SlideBox::new("B", StackType::Vertical, align, 1);
        b.width = width;
        b.height = height;
        b
    }

    fn image(width: u32, height: u32) -> Image {
        let data = ImageData {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
            channels: 4,
        };
        Image::new("pic.png", data, 3)
    }

    #[test]
    fn test_texts_stack_from_top_padding() {
        let mut b = sized_box(TextAlign::Left, 1.0, 1.0);
        for t in ["one", "two"] {
            b.elements
                .push(SlideElement::Text(Text::new(t, FontSize::Normal, 2)));
        }
        position_elements(&mut b, &MonospaceMetrics::default(), &config());

        // Line height 21.6px, ascent 14.4px in a 100px high box
        let ys: Vec<f64> = b.texts().map(|t| t.y).collect();
        assert!((ys[0] - (0.05 + 0.144)).abs() < EPS);
        assert!((ys[1] - (0.05 + 0.216 + 0.144)).abs() < EPS);
        assert!(b.texts().all(|t| (t.x - 0.025).abs() < EPS));
    }

    #[test]
    fn test_alignment() {
        let metrics = MonospaceMetrics::default();
        for (align, expected) in [
            (TextAlign::Left, 0.05),
            // "abcd" is 36px wide in a 100px box
            (TextAlign::Center, 0.5 - 0.18),
            (TextAlign::Right, 1.0 - 0.36 - 0.05),
        ] {
            let mut b = sized_box(align, 0.5, 1.0);
            b.elements
                .push(SlideElement::Text(Text::new("abcd", FontSize::Normal, 2)));
            b.elements
                .push(SlideElement::Text(Text::new("abcd", FontSize::Normal, 3)));
            position_elements(&mut b, &metrics, &config());
            let x = b.texts().next().unwrap().x;
            assert!((x - expected).abs() < EPS, "{:?}: {} != {}", align, x, expected);
        }
    }

    #[test]
    fn test_lone_text_is_centered() {
        let mut b = sized_box(TextAlign::Center, 1.0, 1.0);
        b.elements
            .push(SlideElement::Text(Text::new("Title", FontSize::Normal, 2)));
        position_elements(&mut b, &MonospaceMetrics::default(), &config());
        let t = b.texts().next().unwrap();
        assert!((t.y - (0.5 - 0.108 + 0.144)).abs() < EPS);
    }

    #[test]
    fn test_lone_image_is_centered_and_capped() {
        // A square image in a 200x100 box would need 1.8 of the box height
        let mut b = sized_box(TextAlign::Center, 1.0, 1.0);
        b.elements.push(SlideElement::Image(image(10, 10)));
        position_elements(&mut b, &MonospaceMetrics::default(), &config());
        let SlideElement::Image(img) = &b.elements[0] else {
            panic!("expected image");
        };
        assert!((img.rheight - 0.95).abs() < EPS);
        assert!((img.rwidth - 0.475).abs() < EPS);
        assert!((img.y - 0.025).abs() < EPS);
        assert!((img.x - (0.5 - 0.2375)).abs() < EPS);
    }

    #[test]
    fn test_image_after_text() {
        // Wide image: 0.9 * 200px = 180px by 18px
        let mut b = sized_box(TextAlign::Left, 1.0, 1.0);
        b.elements
            .push(SlideElement::Text(Text::new("caption", FontSize::Normal, 2)));
        b.elements.push(SlideElement::Image(image(100, 10)));
        position_elements(&mut b, &MonospaceMetrics::default(), &config());
        let SlideElement::Image(img) = &b.elements[1] else {
            panic!("expected image");
        };
        assert!((img.rwidth - 0.9).abs() < EPS);
        assert!((img.rheight - 0.18).abs() < EPS);
        assert!((img.y - (0.05 + 0.216)).abs() < EPS);
    }
}
