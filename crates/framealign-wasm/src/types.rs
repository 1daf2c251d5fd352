//! WASM-compatible wrapper types.
//!
//! These wrap the core value types and expose them to JavaScript through
//! getters, converting between Rust and JS representations.

use framealign_core::raster::{image_from_raw, RasterError, RgbImage};
use framealign_core::{AlignerConfig, CropRegion, DisplayFit};
use wasm_bindgen::prelude::*;

use crate::error::js_error;

/// An RGB image held in WASM memory.
///
/// Pixel data is 3 bytes per pixel, row-major. `pixels()` copies the buffer
/// into a JS `Uint8Array`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the RGB pixel data as a `Uint8Array` (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsImage {
    pub(crate) fn from_rgb(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    /// Convert to an `RgbImage`, validating the buffer length.
    pub(crate) fn to_rgb(&self) -> Result<RgbImage, RasterError> {
        image_from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Fitted display size and centering pan for a photo.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsDisplayFit {
    inner: DisplayFit,
}

#[wasm_bindgen]
impl JsDisplayFit {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.size.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.size.height
    }

    #[wasm_bindgen(getter)]
    pub fn default_pan_x(&self) -> f64 {
        self.inner.default_pan.x
    }

    #[wasm_bindgen(getter)]
    pub fn default_pan_y(&self) -> f64 {
        self.inner.default_pan.y
    }
}

impl JsDisplayFit {
    pub(crate) fn inner(&self) -> DisplayFit {
        self.inner
    }
}

impl From<DisplayFit> for JsDisplayFit {
    fn from(inner: DisplayFit) -> Self {
        Self { inner }
    }
}

/// A square crop in processed-image pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCropRegion {
    inner: CropRegion,
}

#[wasm_bindgen]
impl JsCropRegion {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn side(&self) -> u32 {
        self.inner.side
    }
}

impl JsCropRegion {
    pub(crate) fn inner(&self) -> CropRegion {
        self.inner
    }
}

impl From<CropRegion> for JsCropRegion {
    fn from(inner: CropRegion) -> Self {
        Self { inner }
    }
}

/// Read an optional config object from JS. `undefined` and `null` mean
/// defaults; any field left out also takes its default.
pub(crate) fn config_from_js(config: JsValue) -> Result<AlignerConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(AlignerConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| js_error(format!("Invalid aligner config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use framealign_core::{fit, Size, ViewportSpec};

    #[test]
    fn test_js_image_accessors() {
        let img = JsImage::new(4, 2, vec![7u8; 24]);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.byte_length(), 24);
        assert_eq!(img.pixels(), vec![7u8; 24]);
    }

    #[test]
    fn test_js_image_rgb_round_trip() {
        let pixels: Vec<u8> = (0..18).collect();
        let img = JsImage::new(3, 2, pixels.clone());
        let rgb = img.to_rgb().unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));

        let back = JsImage::from_rgb(rgb);
        assert_eq!(back.pixels(), pixels);
    }

    #[test]
    fn test_js_image_bad_buffer() {
        let img = JsImage::new(4, 4, vec![0u8; 5]);
        assert!(img.to_rgb().is_err());
    }

    #[test]
    fn test_display_fit_getters() {
        let fit: JsDisplayFit = fit(Size::new(3000, 4000), ViewportSpec::new(1080))
            .unwrap()
            .into();
        assert_eq!(fit.width(), 1080);
        assert_eq!(fit.height(), 1440);
        assert_eq!(fit.default_pan_x(), 0.0);
        assert_eq!(fit.default_pan_y(), 180.0);
    }

    #[test]
    fn test_crop_region_getters() {
        let crop: JsCropRegion = CropRegion::new(0, 270, 1620).into();
        assert_eq!((crop.x(), crop.y(), crop.side()), (0, 270, 1620));
    }
}
