//! Font metrics used for word-wrapping and text placement

use serde::Deserialize;
use thiserror::Error;

use crate::document::FontSize;

/// Pixel size of each relative font size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontTable {
    pub huge: f64,
    pub title: f64,
    pub normal: f64,
    pub small: f64,
}

impl Default for FontTable {
    fn default() -> Self {
        Self {
            huge: 40.0,
            title: 25.0,
            normal: 18.0,
            small: 15.0,
        }
    }
}

impl FontTable {
    pub fn get(&self, size: FontSize) -> f64 {
        match size {
            FontSize::Huge => self.huge,
            FontSize::Title => self.title,
            FontSize::Normal => self.normal,
            FontSize::Small => self.small,
        }
    }
}

/// Measures text in pixels.
///
/// The normalized helpers divide by a box height in pixels and never by
/// less than one pixel.
pub trait FontMetrics {
    fn pixel_size(&self, font: FontSize) -> f64;

    fn advance_width(&self, c: char, font: FontSize) -> f64;

    fn string_width(&self, s: &str, font: FontSize) -> f64 {
        s.chars().map(|c| self.advance_width(c, font)).sum()
    }

    fn line_height_px(&self, font: FontSize) -> f64;

    fn ascent_px(&self, font: FontSize) -> f64;

    fn line_height(&self, font: FontSize, box_height_px: f64) -> f64 {
        self.line_height_px(font) / box_height_px.max(1.0)
    }

    fn ascent(&self, font: FontSize, box_height_px: f64) -> f64 {
        self.ascent_px(font) / box_height_px.max(1.0)
    }
}

/// Fixed-ratio metrics: every glyph is `advance` times the pixel size wide
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub sizes: FontTable,
    pub advance: f64,
    pub line_height: f64,
    pub ascent: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            sizes: FontTable::default(),
            advance: 0.5,
            line_height: 1.2,
            ascent: 0.8,
        }
    }
}

impl MonospaceMetrics {
    pub fn new(sizes: FontTable) -> Self {
        Self {
            sizes,
            ..Self::default()
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn pixel_size(&self, font: FontSize) -> f64 {
        self.sizes.get(font)
    }

    fn advance_width(&self, _c: char, font: FontSize) -> f64 {
        self.sizes.get(font) * self.advance
    }

    fn line_height_px(&self, font: FontSize) -> f64 {
        self.sizes.get(font) * self.line_height
    }

    fn ascent_px(&self, font: FontSize) -> f64 {
        self.sizes.get(font) * self.ascent
    }
}

#[derive(Error, Debug, Clone)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Glyph metrics read from a TrueType or OpenType font
pub struct FontdueMetrics {
    font: fontdue::Font,
    sizes: FontTable,
}

impl FontdueMetrics {
    pub fn from_bytes(bytes: &[u8], sizes: FontTable) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font, sizes })
    }

    fn line_metrics(&self, font: FontSize) -> Option<fontdue::LineMetrics> {
        self.font
            .horizontal_line_metrics(self.sizes.get(font) as f32)
    }
}

impl std::fmt::Debug for FontdueMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueMetrics")
            .field("sizes", &self.sizes)
            .finish_non_exhaustive()
    }
}

impl FontMetrics for FontdueMetrics {
    fn pixel_size(&self, font: FontSize) -> f64 {
        self.sizes.get(font)
    }

    fn advance_width(&self, c: char, font: FontSize) -> f64 {
        self.font.metrics(c, self.sizes.get(font) as f32).advance_width as f64
    }

    fn line_height_px(&self, font: FontSize) -> f64 {
        self.line_metrics(font)
            .map(|m| m.new_line_size as f64)
            .unwrap_or_else(|| self.sizes.get(font) * 1.2)
    }

    fn ascent_px(&self, font: FontSize) -> f64 {
        self.line_metrics(font)
            .map(|m| m.ascent as f64)
            .unwrap_or_else(|| self.sizes.get(font) * 0.8)
    }
}
