//! JPEG encoding bindings for saving committed photos.

use framealign_core::encode;
use wasm_bindgen::prelude::*;

use crate::error::js_error;
use crate::types::JsImage;

/// Encode RGB pixel data (3 bytes per pixel, row-major) to JPEG bytes.
///
/// `quality` is 1-100; values outside are clamped.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(js_error)
}

/// Encode a `JsImage`, typically `JsCommitted.image`, to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let image = image.to_rgb().map_err(js_error)?;
    encode::encode_image(&image, quality).map_err(js_error)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 50 * 50 * 3];
        let jpeg = encode_jpeg(&pixels, 50, 50, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        assert!(encode_jpeg(&[], 0, 10, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_from_image() {
        let img = JsImage::new(20, 20, vec![64u8; 20 * 20 * 3]);
        let jpeg = encode_jpeg_from_image(&img, 80).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
