//! Conversion options, loadable from JSON.

use crate::palette::Palette;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Output width in characters
    pub width: u32,
    pub palette: Palette,
    /// Swap dark and light when picking characters. Colors are unaffected.
    pub invert: bool,
    /// Render as plain text instead of per-cell color. Display only.
    pub grayscale: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            palette: Palette::Standard,
            invert: false,
            grayscale: true,
        }
    }
}

impl ConversionOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
