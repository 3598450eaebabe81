//! Image loading for `image` statements

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::ImageData;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image '{0}' is not available")]
    Missing(String),
}

/// Turns an image filename from the source into pixels
pub trait ImageDecoder {
    fn decode(&self, filename: &str) -> Result<ImageData, DecodeError>;
}

/// Decodes image files from disk, resolving relative names against a base
/// directory
#[derive(Debug, Clone, Default)]
pub struct FileDecoder {
    base_dir: Option<PathBuf>,
}

impl FileDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageDecoder for FileDecoder {
    fn decode(&self, filename: &str) -> Result<ImageData, DecodeError> {
        let path = self.resolve(filename);
        let bytes = std::fs::read(&path).map_err(|source| DecodeError::Io {
            path: path.clone(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| DecodeError::Image { path: path.clone(), source })?;
        let channels = decoded.color().channel_count();
        let rgba = decoded.to_rgba8();
        log::debug!(
            "decoded {} ({}x{}, {} channels)",
            path.display(),
            rgba.width(),
            rgba.height(),
            channels
        );
        Ok(ImageData {
            width: rgba.width(),
            height: rgba.height(),
            channels,
            pixels: rgba.into_raw(),
        })
    }
}

/// Re-encode decoded pixels as PNG bytes
pub fn encode_png(data: &ImageData) -> Result<Vec<u8>, image::ImageError> {
    let mut out = std::io::Cursor::new(Vec::new());
    let buffer = image::RgbaImage::from_raw(data.width, data.height, data.pixels.clone())
        .ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
    buffer.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}
