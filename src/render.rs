//! Presentation of a [`ConversionResult`]: plain, ANSI truecolor and HTML.

use crate::result::{Cell, ConversionResult};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Plain text in grayscale mode, one truecolor escape per cell otherwise.
pub fn to_ansi(result: &ConversionResult, grayscale: bool) -> String {
    if grayscale {
        return result.text().to_string();
    }
    // ~19 bytes of escape per cell
    let mut out = String::with_capacity(result.width() * result.height() * 24);
    for row in result.cells() {
        for cell in row {
            let [r, g, b] = cell.color.0;
            let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{}", cell.ch);
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

/// A `<pre>` block. Grayscale mode emits the text as one span; color mode
/// emits a `<div>` per row and a colored `<span>` per cell.
pub fn to_html(result: &ConversionResult, grayscale: bool) -> String {
    let mut out = String::from("<pre class=\"ascii-art\">");
    if grayscale {
        out.push_str("<span>");
        push_escaped(&mut out, result.text());
        out.push_str("</span>");
    } else {
        for row in result.cells() {
            out.push_str("<div>");
            for cell in row {
                push_cell(&mut out, cell);
            }
            out.push_str("</div>");
        }
    }
    out.push_str("</pre>\n");
    out
}

fn push_cell(out: &mut String, cell: &Cell) {
    let _ = write!(out, "<span style=\"color: {}\">", cell.color);
    push_escaped_char(out, cell.ch);
    out.push_str("</span>");
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        push_escaped_char(out, c);
    }
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
