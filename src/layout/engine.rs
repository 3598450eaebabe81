//! Slide layout: box sizing, row packing and positioning

use crate::document::{Slide, SlideBox, SlideElement, SlideList, StackType};

use super::position::position_elements;
use super::wrap::wrap_box;
use super::{FontMetrics, LayoutConfig, LayoutError};

/// Tolerance for deciding that a row of horizontal boxes is full
const ROW_EPSILON: f64 = 1e-6;

/// Lay out every slide and template of a list in place
pub fn apply(
    list: &mut SlideList,
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    for slide in &mut list.slides {
        layout_slide(slide, metrics, config)?;
    }
    Ok(())
}

/// Lay out one slide. Nested slides are laid out first, on their own, and
/// are drawn over the host slide.
pub fn layout_slide(
    slide: &mut Slide,
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    for element in &mut slide.elements {
        if let SlideElement::Slide(nested) = element {
            layout_slide(nested, metrics, config)?;
        }
    }

    let total_vertical = measure(slide, metrics, config)?;
    pack_rows(slide, total_vertical, metrics, config)?;
    place(slide, metrics, config);

    log::debug!(
        "laid out '{}' for {}x{}",
        slide.name,
        config.viewport.width,
        config.viewport.height
    );
    Ok(())
}

fn boxes_mut(slide: &mut Slide) -> impl Iterator<Item = &mut SlideBox> {
    slide.elements.iter_mut().filter_map(|e| match e {
        SlideElement::Box(b) => Some(b),
        _ => None,
    })
}

/// Height a vertical box needs for its content, as a fraction of the
/// viewport height
fn content_height(b: &SlideBox, metrics: &dyn FontMetrics, config: &LayoutConfig) -> f64 {
    let vp = config.viewport;
    let mut height = config.padding_px() / vp.height;
    for element in &b.elements {
        match element {
            SlideElement::Text(text) => height += metrics.line_height_px(text.font_size) / vp.height,
            SlideElement::Image(image) => {
                height += config.image_scale * b.width / image.data.aspect_ratio() * vp.aspect();
            }
            _ => {}
        }
    }
    height
}

/// Size vertical boxes to their content. Returns their total height.
fn measure(
    slide: &mut Slide,
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
) -> Result<f64, LayoutError> {
    let mut total = 0.0;
    for b in boxes_mut(slide) {
        match b.stack {
            StackType::Vertical => {
                b.width = 1.0;
                wrap_box(b, metrics, config)?;
                b.height = content_height(b, metrics, config);
                total += b.height;
            }
            StackType::Horizontal => b.height = 1.0,
        }
    }
    if total > 1.0 {
        log::warn!(
            "slide '{}': vertical boxes need {:.3} of the viewport height",
            slide.name,
            total
        );
    }
    Ok(total)
}

/// Group consecutive horizontal boxes into rows, size them, and share the
/// height left by vertical boxes.
fn pack_rows(
    slide: &mut Slide,
    total_vertical: f64,
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut open_row = false;
    for (index, element) in slide.elements.iter().enumerate() {
        match element {
            SlideElement::Box(b) if b.stack == StackType::Horizontal => {
                if !open_row {
                    rows.push(Vec::new());
                    open_row = true;
                }
                if let Some(row) = rows.last_mut() {
                    row.push(index);
                }
            }
            SlideElement::Box(_) => open_row = false,
            _ => {}
        }
    }

    let leftover = 1.0 - total_vertical;
    if rows.is_empty() {
        let count = slide.boxes().count();
        if count > 0 && leftover > 0.0 {
            let share = leftover / count as f64;
            for b in boxes_mut(slide) {
                b.height += share;
            }
        }
        return Ok(());
    }

    let row_height = (leftover / rows.len() as f64).max(0.0);
    for row in &rows {
        let width = 1.0 / row.len() as f64;
        for &index in row {
            if let SlideElement::Box(b) = &mut slide.elements[index] {
                b.width = width;
                b.height = row_height;
                wrap_box(b, metrics, config)?;
            }
        }
    }
    Ok(())
}

/// Walk the boxes with a cursor, then position each box's content
fn place(slide: &mut Slide, metrics: &dyn FontMetrics, config: &LayoutConfig) {
    let (mut cur_x, mut cur_y) = (0.0, 0.0);
    for b in boxes_mut(slide) {
        b.x = cur_x;
        b.y = cur_y;
        match b.stack {
            StackType::Vertical => cur_y += b.height,
            StackType::Horizontal => {
                cur_x += b.width;
                if cur_x >= 1.0 - ROW_EPSILON {
                    cur_x = 0.0;
                    cur_y += b.height;
                }
            }
        }
        position_elements(b, metrics, config);
    }
}
