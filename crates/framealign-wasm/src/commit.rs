//! WASM binding for the full commit flow over an in-memory RGB buffer.
//!
//! Hosts without their own image library hand the decoded photo to
//! `commit_photo` and get back the square, mirrored result.
//!
//! ```typescript
//! const committed = commit_photo(image, view, { targetSide: 1080 });
//! const jpeg = committed.to_jpeg();
//! ```

use framealign_core::encode::{encode_image, EncodeError};
use framealign_core::raster::RgbImage;
use framealign_core::{
    commit, AlignError, AlignerConfig, CropRegion, ProcessingPlan, RasterOps, ViewTransform,
};
use wasm_bindgen::prelude::*;

use crate::error::{align_error, js_error};
use crate::transform::JsViewTransform;
use crate::types::{config_from_js, JsCropRegion, JsImage};

/// The output of `commit_photo`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsCommitted {
    image: JsImage,
    crop: CropRegion,
    plan: ProcessingPlan,
    jpeg_quality: u8,
}

#[wasm_bindgen]
impl JsCommitted {
    /// The saved photo (copied).
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> JsImage {
        self.image.clone()
    }

    /// The crop that was applied, in processed-image pixels.
    #[wasm_bindgen(getter)]
    pub fn crop(&self) -> JsCropRegion {
        self.crop.into()
    }

    /// The executed steps, in order.
    pub fn plan(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.plan.steps()).map_err(js_error)
    }

    /// Encode the saved photo as JPEG at the configured `jpegQuality`.
    pub fn to_jpeg(&self) -> Result<Vec<u8>, JsValue> {
        self.encode().map_err(js_error)
    }
}

impl JsCommitted {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let image = self
            .image
            .to_rgb()
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        encode_image(&image, self.jpeg_quality)
    }
}

/// Align, crop and mirror `image` for the view in `transform`.
///
/// `config` may be `undefined` for the defaults.
#[wasm_bindgen]
pub fn commit_photo(
    image: &JsImage,
    transform: &JsViewTransform,
    config: JsValue,
) -> Result<JsCommitted, JsValue> {
    let config = config_from_js(config)?;
    let rgb = image.to_rgb().map_err(js_error)?;
    commit_rgb(rgb, &transform.inner(), &config).map_err(align_error)
}

pub(crate) fn commit_rgb(
    image: RgbImage,
    transform: &ViewTransform,
    config: &AlignerConfig,
) -> Result<JsCommitted, AlignError> {
    let ops = RasterOps::new(config.resize_filter);
    let committed = commit(&ops, image, transform, config)?;
    Ok(JsCommitted {
        image: JsImage::from_rgb(committed.image),
        crop: committed.crop,
        plan: committed.plan,
        jpeg_quality: config.jpeg_quality,
    })
}
