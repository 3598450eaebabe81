//! Slide rendering
//!
//! [`canvas`] walks a laid-out slide and issues draw calls to any
//! [`Canvas`]; [`svg`] provides the canvas used for file output.

pub mod canvas;
pub mod config;
pub mod svg;

pub use canvas::{render_end_slide, render_slide, Canvas, DrawOptions, Rect, TextAnchor};
pub use config::SvgConfig;
pub use svg::{render_end_svg, render_svg, SvgCanvas};
