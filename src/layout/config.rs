//! Configuration for the layout engine

/// Pixel size of the surface slides are laid out for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect(&self) -> f64 {
        self.width / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 854.0,
            height: 480.0,
        }
    }
}

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub viewport: Viewport,

    /// Inner box padding as a fraction of viewport width. The same pixel
    /// amount is used vertically.
    pub padding: f64,

    /// Fraction of its box width an image is drawn at
    pub image_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            padding: 0.025,
            image_scale: 0.9,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport size in pixels
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Set the box padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the image scale
    pub fn with_image_scale(mut self, scale: f64) -> Self {
        self.image_scale = scale;
        self
    }

    /// Padding in pixels
    pub fn padding_px(&self) -> f64 {
        self.padding * self.viewport.width
    }
}
