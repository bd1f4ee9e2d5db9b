//! Decoded source images. Everything that reaches the converter goes through here.

use crate::{AsciifyError, Result};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// An immutable RGBA image ready for conversion.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    /// Sniff `bytes`, reject anything that is not an `image/*` type, then decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mime = sniff_mime(bytes)?;
        log::debug!("decoding {} bytes as {}", bytes.len(), mime);
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from(image))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes).map_err(|e| match e {
            AsciifyError::NotAnImage(mime) => {
                AsciifyError::NotAnImage(format!("{} ({})", path.as_ref().display(), mime))
            }
            other => other,
        })
    }

    /// Wrap a raw row-major RGBA buffer, as produced by a canvas `getImageData`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize).saturating_mul(height as usize).saturating_mul(4);
        let actual = data.len();
        RgbaImage::from_raw(width, height, data)
            .filter(|_| actual == expected)
            .map(|pixels| Self { pixels })
            .ok_or(AsciifyError::InvalidBuffer { expected, actual })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Width over height; `None` when either side is zero.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(f64::from(self.width()) / f64::from(self.height()))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        Self { pixels: image.into_rgba8() }
    }
}

impl From<RgbaImage> for DecodedImage {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

fn sniff_mime(bytes: &[u8]) -> Result<&'static str> {
    match infer::get(bytes) {
        Some(kind) if kind.mime_type().starts_with("image/") => Ok(kind.mime_type()),
        Some(kind) => Err(AsciifyError::NotAnImage(kind.mime_type().to_string())),
        None => Err(AsciifyError::NotAnImage("unknown content type".to_string())),
    }
}
