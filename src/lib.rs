//! Image to ASCII art converter with colorized output.

pub mod export;
pub mod grid;
pub mod options;
pub mod palette;
pub mod render;
pub mod result;
pub mod source;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use options::ConversionOptions;
pub use palette::{CharRamp, Palette};
pub use result::{Cell, ConversionResult, Rgb};
pub use source::DecodedImage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsciifyError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Not an image: {0}")]
    NotAnImage(String),
    #[error("Invalid pixel buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },
    #[error("Unknown character set: {0}")]
    UnknownPalette(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciifyError>;

/// Stateless brightness-to-character converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.options.palette = palette;
        self
    }

    pub fn with_invert(mut self, enabled: bool) -> Self {
        self.options.invert = enabled;
        self
    }

    pub fn with_grayscale(mut self, enabled: bool) -> Self {
        self.options.grayscale = enabled;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn convert(&self, image: &DecodedImage) -> ConversionResult {
        convert(image, &self.options)
    }
}

/// Convert `image` into a character grid plus per-cell source colors.
///
/// Degenerate geometry (empty image, zero width, or an aspect ratio that
/// leaves no rows) produces an empty result.
pub fn convert(image: &DecodedImage, options: &ConversionOptions) -> ConversionResult {
    let Some((cols, rows)) = grid::output_dimensions(image, options.width) else {
        log::debug!(
            "nothing to convert: {}x{} image at width {}",
            image.width(),
            image.height(),
            options.width
        );
        return ConversionResult::empty();
    };
    log::debug!(
        "converting {}x{} image to {}x{} cells ({} palette, invert={})",
        image.width(),
        image.height(),
        cols,
        rows,
        options.palette,
        options.invert
    );

    let ramp = CharRamp::new(options.palette);
    let resampled = grid::resample(image, cols, rows);

    let cells = resampled
        .rows()
        .map(|row| {
            row.map(|px| {
                let [r, g, b, _] = px.0;
                let brightness = (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0;
                let adjusted = if options.invert { 255.0 - brightness } else { brightness };
                Cell { ch: ramp.char_for(adjusted), color: Rgb([r, g, b]) }
            })
            .collect()
        })
        .collect();

    ConversionResult::from_rows(cells)
}
