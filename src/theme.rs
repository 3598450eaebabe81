//! Theme files for fonts, colors and spacing
//!
//! A theme is a small TOML document. Every section and key is optional and
//! falls back to the built-in look: black serif text on white, and a black
//! end frame.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{FontLoadError, FontMetrics, FontTable, FontdueMetrics, LayoutConfig, MonospaceMetrics};

/// Errors that can occur when loading a theme or its font
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to load font '{path}': {source}")]
    FontError {
        path: PathBuf,
        #[source]
        source: FontLoadError,
    },
}

/// The built-in theme, spelled out
pub const DEFAULT_THEME: &str = r##"
[metadata]
name = "default"

[fonts]
family = "Serif"
huge = 40
title = 25
normal = 18
small = 15

[colors]
background = "#ffffff"
text = "#000000"
end-background = "#000000"
end-text = "#ffffff"

[layout]
padding = 0.025
image-scale = 0.9
"##;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub family: String,
    /// TrueType or OpenType file used for text measurement
    pub file: Option<PathBuf>,
    #[serde(flatten)]
    pub sizes: FontTable,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            family: "Serif".to_string(),
            file: None,
            sizes: FontTable::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Colors {
    pub background: String,
    pub text: String,
    pub end_background: String,
    pub end_text: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            end_background: "#000000".to_string(),
            end_text: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Spacing {
    pub padding: f64,
    pub image_scale: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            padding: layout.padding,
            image_scale: layout.image_scale,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Metadata {
    name: Option<String>,
    description: Option<String>,
}

/// TOML structure for deserializing themes
#[derive(Default, Deserialize)]
#[serde(default)]
struct TomlTheme {
    metadata: Metadata,
    fonts: Fonts,
    colors: Colors,
    layout: Spacing,
}

/// Fonts, colors and spacing used for layout and rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fonts: Fonts,
    pub colors: Colors,
    pub spacing: Spacing,
}

impl Theme {
    /// Load a theme from a TOML file. A relative font path is resolved
    /// against the theme file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::from_str(&content)?;
        if let (Some(file), Some(dir)) = (&theme.fonts.file, path.parent()) {
            if file.is_relative() {
                theme.fonts.file = Some(dir.join(file));
            }
        }
        Ok(theme)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(Theme {
            name: parsed.metadata.name,
            description: parsed.metadata.description,
            fonts: parsed.fonts,
            colors: parsed.colors,
            spacing: parsed.layout,
        })
    }

    /// Copy the theme's spacing into a layout configuration
    pub fn apply_to(&self, config: LayoutConfig) -> LayoutConfig {
        config
            .with_padding(self.spacing.padding)
            .with_image_scale(self.spacing.image_scale)
    }

    /// Metrics for the theme's fonts: measured from the font file when one
    /// is set, estimated otherwise
    pub fn metrics(&self) -> Result<Box<dyn FontMetrics>, ThemeError> {
        match &self.fonts.file {
            Some(path) => {
                let bytes = std::fs::read(path)?;
                let metrics = FontdueMetrics::from_bytes(&bytes, self.fonts.sizes).map_err(
                    |source| ThemeError::FontError {
                        path: path.clone(),
                        source,
                    },
                )?;
                log::debug!("measuring text with {}", path.display());
                Ok(Box::new(metrics))
            }
            None => Ok(Box::new(MonospaceMetrics::new(self.fonts.sizes))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FontSize;

    #[test]
    fn test_default_theme_matches_constant() {
        let parsed = Theme::from_str(DEFAULT_THEME).expect("Should parse");
        assert_eq!(parsed.name.as_deref(), Some("default"));
        assert_eq!(
            Theme {
                name: None,
                ..parsed
            },
            Theme::default()
        );
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme = Theme::from_str(
            r##"
[fonts]
normal = 20

[colors]
text = "#333333"
"##,
        )
        .expect("Should parse");
        assert_eq!(theme.fonts.sizes.normal, 20.0);
        assert_eq!(theme.fonts.sizes.huge, 40.0);
        assert_eq!(theme.fonts.family, "Serif");
        assert_eq!(theme.colors.text, "#333333");
        assert_eq!(theme.colors.end_background, "#000000");
        assert_eq!(theme.spacing, Spacing::default());
    }

    #[test]
    fn test_apply_to_layout_config() {
        let theme = Theme::from_str("[layout]\npadding = 0.05\nimage-scale = 0.5\n").unwrap();
        let config = theme.apply_to(LayoutConfig::new().with_viewport(200.0, 100.0));
        assert_eq!(config.padding, 0.05);
        assert_eq!(config.image_scale, 0.5);
        assert_eq!(config.viewport.width, 200.0);
    }

    #[test]
    fn test_metrics_without_font_file() {
        let theme = Theme::from_str("[fonts]\nnormal = 10\n").unwrap();
        let metrics = theme.metrics().unwrap();
        assert_eq!(metrics.string_width("abc", FontSize::Normal), 15.0);
    }

    #[test]
    fn test_missing_font_file() {
        let theme = Theme::from_str("[fonts]\nfile = \"/no/such/font.ttf\"\n").unwrap();
        assert!(matches!(theme.metrics(), Err(ThemeError::IoError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Theme::from_str("this is not valid toml {{{{").is_err());
        assert!(Theme::from_str("[colors]\nforeground = \"#000\"\n").is_err());
    }
}
