//! Export of finished art: text files, JSON and the system clipboard.

use crate::result::ConversionResult;
use crate::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::AsciifyError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_EXPORT_NAME: &str = "ascii-art.txt";

/// Write exactly the result text, trailing newline included.
pub fn save_text(result: &ConversionResult, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, result.text())?;
    Ok(())
}

/// Write text and cells as pretty-printed JSON.
pub fn save_json(result: &ConversionResult, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Put `text` on the system clipboard.
///
/// On Linux (X11 and Wayland) the clipboard is served by the process that set
/// it, so this blocks until another program takes the clipboard over. A CLI
/// that returned right away would lose the text on exit.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| AsciifyError::Clipboard(e.to_string()))?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        log::info!("serving {} bytes on the clipboard until it is replaced", text.len());
        clipboard
            .set()
            .wait()
            .text(text)
            .map_err(|e| AsciifyError::Clipboard(e.to_string()))?;
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text)
            .map_err(|e| AsciifyError::Clipboard(e.to_string()))?;
        log::info!("copied {} bytes to clipboard", text.len());
    }

    Ok(())
}
