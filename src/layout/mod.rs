//! Layout engine for computing box and element geometry
//!
//! This module takes a parsed slide list and annotates it in place with
//! normalized positions: boxes relative to the viewport, text runs and images
//! relative to their box. Text that does not fit its box is word-wrapped.

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
mod position;
mod wrap;

pub use config::{LayoutConfig, Viewport};
pub use engine::{apply, layout_slide};
pub use error::LayoutError;
pub use metrics::{FontLoadError, FontMetrics, FontTable, FontdueMetrics, MonospaceMetrics};
pub use wrap::wrap_box;

use crate::document::{Slide, SlideList};

/// Tolerance used when checking that boxes stay inside the viewport
const BOUNDS_EPSILON: f64 = 1e-6;

/// Names of boxes whose right edge lies past the viewport, as
/// `slide/box` paths
pub fn overflowing_boxes(list: &SlideList) -> Vec<String> {
    let mut found = Vec::new();
    for slide in list {
        collect_overflow(slide, &slide.name, &mut found);
    }
    found
}

fn collect_overflow(slide: &Slide, prefix: &str, found: &mut Vec<String>) {
    for b in slide.boxes() {
        if b.x + b.width > 1.0 + BOUNDS_EPSILON {
            found.push(format!("{}/{}", prefix, b.name));
        }
    }
    for nested in slide.nested() {
        collect_overflow(nested, &format!("{}/{}", prefix, nested.name), found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{SlideBox, SlideElement, StackType, TextAlign};

    #[test]
    fn test_overflowing_boxes() {
        let mut inner = Slide::new("T", true, 1);
        let mut wide = SlideBox::new("Wide", StackType::Horizontal, TextAlign::Left, 2);
        wide.x = 0.5;
        wide.width = 0.75;
        inner.elements.push(SlideElement::Box(wide));

        let mut outer = Slide::new("S", true, 4);
        let mut ok = SlideBox::new("Ok", StackType::Horizontal, TextAlign::Left, 5);
        ok.x = 0.5;
        ok.width = 0.5;
        outer.elements.push(SlideElement::Box(ok));
        outer.elements.push(SlideElement::Slide(inner));

        let mut list = SlideList::new();
        list.push(outer);
        assert_eq!(overflowing_boxes(&list), vec!["S/T/Wide".to_string()]);
    }
}
