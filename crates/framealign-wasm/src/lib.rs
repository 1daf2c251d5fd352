//! Framealign WASM - WebAssembly bindings for the Framealign crop solver
//!
//! Exposes framealign-core to the JavaScript UI that hosts the preview.
//!
//! # Module Structure
//!
//! - `types` - wrappers for images, display fits and crop regions
//! - `transform` - the live view transform and the crop solver
//! - `plan` - processing plans as JS objects
//! - `commit` - the full commit flow over an RGB buffer
//! - `encode` - JPEG output
//!
//! # Usage
//!
//! ```typescript
//! import init, { fit_display, JsViewTransform, commit_photo } from '@framealign/wasm';
//!
//! await init();
//!
//! const fit = fit_display(image.width, image.height, 1080);
//! const view = new JsViewTransform(fit, undefined);
//! // ... gestures mutate `view` ...
//! const committed = commit_photo(image, view, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod commit;
mod encode;
mod error;
mod plan;
mod transform;
mod types;

pub use commit::{commit_photo, JsCommitted};
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use plan::{plan_geometry, plan_processing};
pub use transform::{fit_display, solve_crop, JsViewTransform};
pub use types::{JsCropRegion, JsDisplayFit, JsImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
