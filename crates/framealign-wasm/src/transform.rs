//! WASM bindings for the live view transform and the crop solver.
//!
//! The gesture layer owns a [`JsViewTransform`] per selected photo and
//! mutates it on every pan, pinch or slider event. Zoom and rotation are
//! clamped here, at mutation time; the solver only reads the value.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const fit = fit_display(photo.width, photo.height, 1080);
//! const view = new JsViewTransform(fit, undefined);
//! view.pan_by(12, -30);
//! view.zoom = 1.4;
//!
//! // After the collaborator has resized, rotated and zoomed the photo:
//! const crop = solve_crop(photo.width, photo.height, out.width, out.height, view, undefined);
//! ```

use framealign_core::plan::effective_zoom;
use framealign_core::{
    compose_scales, fit, quality_resize_scale, solve, AlignError, AlignerConfig, CropRegion,
    DisplayFit, Point, Size, TransformLimits, ViewTransform, ViewportSpec,
};
use wasm_bindgen::prelude::*;

use crate::error::align_error;
use crate::types::{config_from_js, JsCropRegion, JsDisplayFit};

/// Fit a `width` x `height` photo into a square viewport of `viewport_side`.
#[wasm_bindgen]
pub fn fit_display(width: u32, height: u32, viewport_side: u32) -> Result<JsDisplayFit, JsValue> {
    fit(Size::new(width, height), ViewportSpec::new(viewport_side))
        .map(JsDisplayFit::from)
        .map_err(align_error)
}

/// Pan, zoom and rotation of the preview, clamped to the configured limits.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsViewTransform {
    inner: ViewTransform,
    default_pan: Point,
    limits: TransformLimits,
}

#[wasm_bindgen]
impl JsViewTransform {
    /// Start at the recentering default for `fit`. `config` may be
    /// `undefined` to use the default limits.
    #[wasm_bindgen(constructor)]
    pub fn new(fit: &JsDisplayFit, config: JsValue) -> Result<JsViewTransform, JsValue> {
        let config = config_from_js(config)?;
        config.validate().map_err(align_error)?;
        Ok(Self::with_limits(fit.inner(), config.limits))
    }

    #[wasm_bindgen(getter)]
    pub fn pan_x(&self) -> f64 {
        self.inner.pan.x
    }

    #[wasm_bindgen(getter)]
    pub fn pan_y(&self) -> f64 {
        self.inner.pan.y
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom
    }

    #[wasm_bindgen(setter)]
    pub fn set_zoom(&mut self, zoom: f64) {
        self.update(ViewTransform { zoom, ..self.inner });
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation_deg
    }

    #[wasm_bindgen(setter)]
    pub fn set_rotation(&mut self, rotation_deg: f64) {
        self.update(ViewTransform {
            rotation_deg,
            ..self.inner
        });
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.update(self.inner.with_pan(Point::new(x, y)));
    }

    /// Move the viewport by a drag delta, in display pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.update(self.inner.pan_by(dx, dy));
    }

    /// Multiply the zoom by a pinch scale factor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.inner.zoom * factor);
    }

    pub fn rotate_by(&mut self, delta_deg: f64) {
        self.set_rotation(self.inner.rotation_deg + delta_deg);
    }

    /// Back to zoom 1, no rotation and the centering pan.
    pub fn reset(&mut self) {
        self.inner = ViewTransform::reset(self.default_pan);
    }
}

impl JsViewTransform {
    pub(crate) fn with_limits(fit: DisplayFit, limits: TransformLimits) -> Self {
        Self {
            inner: fit.default_transform(),
            default_pan: fit.default_pan,
            limits,
        }
    }

    pub(crate) fn inner(&self) -> ViewTransform {
        self.inner
    }

    fn update(&mut self, transform: ViewTransform) {
        self.inner = transform.clamped(&self.limits);
    }
}

/// Solve the crop for the current view.
///
/// `processed_width` and `processed_height` are the measured size of the
/// photo after the collaborator ran the geometry steps from `plan_geometry`.
#[wasm_bindgen]
pub fn solve_crop(
    source_width: u32,
    source_height: u32,
    processed_width: u32,
    processed_height: u32,
    transform: &JsViewTransform,
    config: JsValue,
) -> Result<JsCropRegion, JsValue> {
    let config = config_from_js(config)?;
    solve_for(
        Size::new(source_width, source_height),
        Size::new(processed_width, processed_height),
        &transform.inner(),
        &config,
    )
    .map(JsCropRegion::from)
    .map_err(align_error)
}

pub(crate) fn solve_for(
    source: Size,
    processed: Size,
    transform: &ViewTransform,
    config: &AlignerConfig,
) -> Result<CropRegion, AlignError> {
    config.validate()?;
    let viewport = config.viewport();
    let display = fit(source, viewport)?;
    let resize_scale = quality_resize_scale(source, viewport, config.quality_headroom)?;
    let resized = source.scaled(resize_scale);
    let scales = compose_scales(source, display.size, resized, processed)?;
    let transform = ViewTransform {
        zoom: effective_zoom(transform.zoom),
        ..*transform
    };
    solve(display.size, viewport, &transform, &scales)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portrait_view() -> JsViewTransform {
        let fit = fit(Size::new(3000, 4000), ViewportSpec::new(1080)).unwrap();
        JsViewTransform::with_limits(fit, TransformLimits::default())
    }

    #[test]
    fn test_starts_centered() {
        let view = portrait_view();
        assert_eq!(view.pan_x(), 0.0);
        assert_eq!(view.pan_y(), 180.0);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.rotation(), 0.0);
    }

    #[test]
    fn test_setters_clamp_to_limits() {
        let mut view = portrait_view();
        view.set_zoom(3.0);
        assert_eq!(view.zoom(), 1.7);
        view.set_zoom(0.5);
        assert_eq!(view.zoom(), 1.0);

        view.set_rotation(45.0);
        assert_eq!(view.rotation(), 20.0);
        view.rotate_by(-100.0);
        assert_eq!(view.rotation(), -20.0);
    }

    #[test]
    fn test_configured_limits_apply() {
        let fit = fit(Size::new(3000, 4000), ViewportSpec::new(1080)).unwrap();
        let limits = TransformLimits {
            min_zoom: 1.0,
            max_zoom: 2.5,
            max_rotation_deg: 10.0,
        };
        let mut view = JsViewTransform::with_limits(fit, limits);

        view.zoom_by(2.0);
        assert_eq!(view.zoom(), 2.0);
        view.zoom_by(2.0);
        assert_eq!(view.zoom(), 2.5);
        view.set_rotation(15.0);
        assert_eq!(view.rotation(), 10.0);
    }

    #[test]
    fn test_pan_is_unclamped() {
        let mut view = portrait_view();
        view.pan_by(100_000.0, -5.0);
        assert_eq!(view.pan_x(), 100_000.0);
        assert_eq!(view.pan_y(), 175.0);

        view.set_pan(-3.0, 4.0);
        assert_eq!((view.pan_x(), view.pan_y()), (-3.0, 4.0));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut view = portrait_view();
        view.pan_by(40.0, 40.0);
        view.set_zoom(1.5);
        view.set_rotation(-7.0);

        view.reset();
        assert_eq!(view.inner(), ViewTransform::reset(Point::new(0.0, 180.0)));
    }

    #[test]
    fn test_solve_for_default_view() {
        let view = portrait_view();
        let crop = solve_for(
            Size::new(3000, 4000),
            Size::new(1620, 2160),
            &view.inner(),
            &AlignerConfig::default(),
        )
        .unwrap();
        assert_eq!(crop, CropRegion::new(0, 270, 1620));
    }

    #[test]
    fn test_solve_for_ignores_skipped_zoom() {
        let mut view = portrait_view();
        view.set_zoom(1.005);
        let crop = solve_for(
            Size::new(3000, 4000),
            Size::new(1620, 2160),
            &view.inner(),
            &AlignerConfig::default(),
        )
        .unwrap();
        assert_eq!(crop, CropRegion::new(0, 270, 1620));
    }

    #[test]
    fn test_solve_for_rejects_empty_source() {
        let view = portrait_view();
        let result = solve_for(
            Size::new(0, 4000),
            Size::new(1620, 2160),
            &view.inner(),
            &AlignerConfig::default(),
        );
        assert!(matches!(result, Err(AlignError::InvalidImage { .. })));
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_fit_display() {
        let fit = fit_display(3000, 4000, 1080).unwrap();
        assert_eq!(fit.height(), 1440);
        assert_eq!(fit.default_pan_y(), 180.0);
    }

    #[wasm_bindgen_test]
    fn test_fit_display_rejects_empty() {
        assert!(fit_display(0, 4000, 1080).is_err());
    }

    #[wasm_bindgen_test]
    fn test_solve_crop_with_default_config() {
        let fit = fit_display(3000, 4000, 1080).unwrap();
        let view = JsViewTransform::new(&fit, JsValue::UNDEFINED).unwrap();
        let crop = solve_crop(3000, 4000, 1620, 2160, &view, JsValue::UNDEFINED).unwrap();
        assert_eq!((crop.x(), crop.y(), crop.side()), (0, 270, 1620));
    }

    #[wasm_bindgen_test]
    fn test_view_transform_rejects_bad_config() {
        let fit = fit_display(3000, 4000, 1080).unwrap();
        let config = serde_wasm_bindgen::to_value(&AlignerConfig {
            viewport_side: 0,
            ..AlignerConfig::default()
        })
        .unwrap();
        assert!(JsViewTransform::new(&fit, config).is_err());
    }
}
