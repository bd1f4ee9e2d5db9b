//! Conversion output: the plain text grid and the parallel colored cells.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

/// CSS notation, e.g. `rgb(255, 0, 12)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "char")]
    pub ch: char,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    text: String,
    cells: Vec<Vec<Cell>>,
}

impl ConversionResult {
    /// The "no art yet" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from cell rows. Text is derived from the same rows, so the two
    /// grids always agree.
    pub(crate) fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        let width = cells.first().map_or(0, Vec::len);
        let mut text = String::with_capacity((width + 1) * cells.len());
        for row in &cells {
            text.extend(row.iter().map(|c| c.ch));
            text.push('\n');
        }
        Self { text, cells }
    }

    /// Rows joined by `\n`, with a trailing newline after the last row.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
