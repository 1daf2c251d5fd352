//! WASM bindings for the processing planner.
//!
//! Plans cross the boundary as plain JS objects, one per step, tagged by
//! `op`:
//!
//! ```typescript
//! [
//!   { op: "resize", size: { width: 1620, height: 2160 } },
//!   { op: "rotate", degrees: -4.5 },
//!   { op: "crop", region: { x: 0, y: 270, side: 1620 } },
//!   { op: "resizeTo", side: 1080 },
//!   { op: "flip", horizontal: true },
//! ]
//! ```
//!
//! A host running its own image library calls `plan_geometry`, executes the
//! steps, measures the result, calls `solve_crop`, then `plan_processing`
//! and executes the steps after the crop.

use framealign_core::plan::{plan as core_plan, plan_geometry as core_plan_geometry};
use framealign_core::{
    quality_resize_scale, AlignError, AlignerConfig, CropRegion, ProcessingPlan, Size,
    ViewTransform,
};
use wasm_bindgen::prelude::*;

use crate::error::{align_error, js_error};
use crate::transform::JsViewTransform;
use crate::types::{config_from_js, JsCropRegion};

/// The geometry steps (resize, rotate, zoom-resize) for the current view.
#[wasm_bindgen]
pub fn plan_geometry(
    source_width: u32,
    source_height: u32,
    transform: &JsViewTransform,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let plan = geometry_plan_for(Size::new(source_width, source_height), &transform.inner(), &config)
        .map_err(align_error)?;
    serde_wasm_bindgen::to_value(plan.steps()).map_err(js_error)
}

/// The full plan, once the crop has been solved.
#[wasm_bindgen]
pub fn plan_processing(
    source_width: u32,
    source_height: u32,
    crop: &JsCropRegion,
    transform: &JsViewTransform,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let plan = full_plan_for(
        Size::new(source_width, source_height),
        crop.inner(),
        &transform.inner(),
        &config,
    )
    .map_err(align_error)?;
    serde_wasm_bindgen::to_value(plan.steps()).map_err(js_error)
}

pub(crate) fn geometry_plan_for(
    source: Size,
    transform: &ViewTransform,
    config: &AlignerConfig,
) -> Result<ProcessingPlan, AlignError> {
    config.validate()?;
    let resize_scale = quality_resize_scale(source, config.viewport(), config.quality_headroom)?;
    core_plan_geometry(source, resize_scale, transform.rotation_deg, transform.zoom)
}

pub(crate) fn full_plan_for(
    source: Size,
    crop: CropRegion,
    transform: &ViewTransform,
    config: &AlignerConfig,
) -> Result<ProcessingPlan, AlignError> {
    config.validate()?;
    let resize_scale = quality_resize_scale(source, config.viewport(), config.quality_headroom)?;
    core_plan(
        source,
        resize_scale,
        transform.rotation_deg,
        transform.zoom,
        crop,
        config.target_side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use framealign_core::Step;

    const SOURCE: Size = Size::new(3000, 4000);

    #[test]
    fn test_geometry_plan_default_view() {
        let transform = ViewTransform::reset(framealign_core::Point::new(0.0, 180.0));
        let plan = geometry_plan_for(SOURCE, &transform, &AlignerConfig::default()).unwrap();
        assert_eq!(
            plan.steps(),
            &[Step::Resize {
                size: Size::new(1620, 2160)
            }]
        );
    }

    #[test]
    fn test_full_plan_extends_geometry_plan() {
        let transform = ViewTransform::default().with_rotation(-6.0).with_zoom(1.25);
        let config = AlignerConfig::default();
        let geometry = geometry_plan_for(SOURCE, &transform, &config).unwrap();
        let full =
            full_plan_for(SOURCE, CropRegion::new(10, 20, 900), &transform, &config).unwrap();

        assert_eq!(full.len(), 6);
        assert_eq!(full.split_at_crop().0, geometry.steps());
        assert_eq!(full.steps()[4], Step::ResizeTo { side: 1080 });
    }

    #[test]
    fn test_full_plan_uses_target_side() {
        let mut config = AlignerConfig::default();
        config.target_side = 512;
        let full = full_plan_for(
            SOURCE,
            CropRegion::new(0, 0, 100),
            &ViewTransform::default(),
            &config,
        )
        .unwrap();
        assert!(full.steps().contains(&Step::ResizeTo { side: 512 }));
    }
}
