//! WebAssembly bindings for asciify

use wasm_bindgen::prelude::*;
use crate::{render, ConversionOptions, DecodedImage, Palette};

#[wasm_bindgen]
pub struct WasmConverter {
    options: ConversionOptions,
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { options: ConversionOptions::default() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.options.width = width;
    }

    /// Select a palette by name: `standard`, `detailed`, `block` or `minimal`
    #[wasm_bindgen]
    pub fn set_palette(&mut self, name: &str) -> Result<(), JsValue> {
        self.options.palette = name
            .parse::<Palette>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_invert(&mut self, enabled: bool) {
        self.options.invert = enabled;
    }

    #[wasm_bindgen]
    pub fn set_grayscale(&mut self, enabled: bool) {
        self.options.grayscale = enabled;
    }

    /// Convert canvas RGBA pixel data.
    ///
    /// Returns `{ text, html, width, height, colors }` where `colors` is a flat
    /// `Uint8Array` of RGB triples in row-major cell order.
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8], width: u32, height: u32) -> Result<js_sys::Object, JsValue> {
        let image = DecodedImage::from_rgba(width, height, image_data.to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let converted = crate::convert(&image, &self.options);
        if converted.is_empty() {
            web_sys::console::warn_1(&"asciify: image too small for the requested width".into());
        }

        let colors: Vec<u8> = converted
            .cells()
            .iter()
            .flatten()
            .flat_map(|cell| cell.color.0)
            .collect();

        let result = js_sys::Object::new();
        js_sys::Reflect::set(&result, &"text".into(), &converted.text().into())?;
        js_sys::Reflect::set(
            &result,
            &"html".into(),
            &render::to_html(&converted, self.options.grayscale).into(),
        )?;
        js_sys::Reflect::set(&result, &"width".into(), &(converted.width() as u32).into())?;
        js_sys::Reflect::set(&result, &"height".into(), &(converted.height() as u32).into())?;
        js_sys::Reflect::set(&result, &"colors".into(), &js_sys::Uint8Array::from(&colors[..]))?;

        Ok(result)
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}
