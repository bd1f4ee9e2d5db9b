//! Named character palettes, ordered from darkest to lightest.

use crate::AsciifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STANDARD: &str = "@%#*+=-:. ";
const DETAILED: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";
const BLOCK: &str = "█▓▒░ ";
const MINIMAL: &str = "█░ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Standard,
    Detailed,
    Block,
    Minimal,
}

impl Palette {
    pub const ALL: [Palette; 4] = [Self::Standard, Self::Detailed, Self::Block, Self::Minimal];

    /// Characters of the palette, darkest first.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => STANDARD,
            Self::Detailed => DETAILED,
            Self::Block => BLOCK,
            Self::Minimal => MINIMAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Detailed => "detailed",
            Self::Block => "block",
            Self::Minimal => "minimal",
        }
    }

    pub fn chars(self) -> Vec<char> {
        self.as_str().chars().collect()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = AsciifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AsciifyError::UnknownPalette(s.to_string()))
    }
}

/// Brightness-to-character lookup for one palette.
///
/// Indexing is `floor(brightness / 255 * (len - 1))`, clamped to the palette.
pub struct CharRamp {
    chars: Vec<char>,
}

impl CharRamp {
    pub fn new(palette: Palette) -> Self {
        Self { chars: palette.chars() }
    }

    pub fn index_for(&self, brightness: f64) -> usize {
        let last = self.chars.len() - 1;
        let idx = (brightness / 255.0 * last as f64).floor();
        if idx.is_nan() || idx < 0.0 {
            0
        } else {
            (idx as usize).min(last)
        }
    }

    pub fn char_for(&self, brightness: f64) -> char {
        self.chars[self.index_for(brightness)]
    }
}
