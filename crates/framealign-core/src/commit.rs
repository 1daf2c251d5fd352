//! Committing the current view as a saved progress photo.
//!
//! The crop can only be solved once the backend has produced the rotated and
//! zoomed image and reported its size, so the plan runs in two halves:
//!
//! 1. geometry prefix (resize, rotate, zoom-resize), then measure
//! 2. solve the crop, then the finishing suffix (crop, resize-to, flip)

use tracing::debug;

use crate::config::AlignerConfig;
use crate::error::AlignError;
use crate::geometry::{CropRegion, ViewTransform};
use crate::ops::{execute, ImageOps};
use crate::plan::{effective_zoom, plan, plan_geometry, ProcessingPlan};
use crate::transform::{compose_scales, fit, quality_resize_scale, solve, DisplayFit, ScaleBundle};

/// Everything a commit produced.
#[derive(Debug)]
pub struct Committed<H> {
    /// The final square, mirrored image.
    pub image: H,
    /// The full plan that was executed.
    pub plan: ProcessingPlan,
    pub crop: CropRegion,
    pub display: DisplayFit,
    pub scales: ScaleBundle,
}

/// Run the whole pipeline on `image` for the view described by `transform`.
///
/// Nothing is retained between calls. On error no partial result is
/// returned.
pub fn commit<O: ImageOps>(
    ops: &O,
    image: O::Handle,
    transform: &ViewTransform,
    config: &AlignerConfig,
) -> Result<Committed<O::Handle>, AlignError> {
    config.validate()?;

    let viewport = config.viewport();
    let transform = &ViewTransform {
        zoom: effective_zoom(transform.zoom),
        ..*transform
    };
    let source = ops.dimensions(&image);
    let display = fit(source, viewport)?;
    let resize_scale = quality_resize_scale(source, viewport, config.quality_headroom)?;

    let geometry = plan_geometry(source, resize_scale, transform.rotation_deg, transform.zoom)?;
    let resized = geometry
        .resize_size()
        .ok_or_else(|| AlignError::InvalidInput("geometry plan has no resize step".into()))?;

    let processed = execute(ops, image, geometry.steps())?;
    let scales = compose_scales(source, display.size, resized, ops.dimensions(&processed))?;
    let crop = solve(display.size, viewport, transform, &scales)?;

    let plan = plan(
        source,
        resize_scale,
        transform.rotation_deg,
        transform.zoom,
        crop,
        config.target_side,
    )?;
    let (_, finishing) = plan.split_at_crop();
    let image = execute(ops, processed, finishing)?;

    debug!(
        steps = plan.len(),
        crop_x = crop.x,
        crop_y = crop.y,
        crop_side = crop.side,
        "committed progress photo"
    );

    Ok(Committed {
        image,
        plan,
        crop,
        display,
        scales,
    })
}
