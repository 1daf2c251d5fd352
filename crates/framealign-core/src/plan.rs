//! The ordered list of primitive operations that turns a source photo into a
//! saved progress photo.
//!
//! Step order is fixed: resize → rotate → zoom-resize → crop → resize-to →
//! flip. Rotation and zoom are dropped when they are visually a no-op, which
//! avoids an extra resample without changing the output.

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input, AlignError};
use crate::geometry::{CropRegion, Size};

/// Rotations smaller than this (degrees) are skipped.
pub const ROTATION_EPSILON_DEG: f64 = 0.1;

/// Zooms closer to 1.0 than this are skipped.
pub const ZOOM_EPSILON: f64 = 0.01;

/// The zoom the executed plan actually applies: 1.0 when the zoom step is
/// skipped. The crop must be solved with this value, not the raw one.
pub fn effective_zoom(zoom: f64) -> f64 {
    if (zoom - 1.0).abs() < ZOOM_EPSILON {
        1.0
    } else {
        zoom
    }
}

/// One primitive image operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Step {
    /// Quality resize of the source, before any lossy rotation.
    Resize { size: Size },
    /// Rotate about the center, expanding the canvas.
    Rotate { degrees: f64 },
    /// Resize the current image by `factor`, whatever its measured size.
    ZoomResize { factor: f64 },
    /// Extract the square region.
    Crop { region: CropRegion },
    /// Resize to a fixed square output.
    ResizeTo { side: u32 },
    Flip { horizontal: bool },
}

impl Step {
    /// Position of this kind of step in the fixed pipeline order.
    fn rank(&self) -> u8 {
        match self {
            Step::Resize { .. } => 0,
            Step::Rotate { .. } => 1,
            Step::ZoomResize { .. } => 2,
            Step::Crop { .. } => 3,
            Step::ResizeTo { .. } => 4,
            Step::Flip { .. } => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Resize { .. } => "resize",
            Step::Rotate { .. } => "rotate",
            Step::ZoomResize { .. } => "zoom-resize",
            Step::Crop { .. } => "crop",
            Step::ResizeTo { .. } => "resize-to",
            Step::Flip { .. } => "flip",
        }
    }
}

/// An immutable, ordered processing plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessingPlan {
    steps: Vec<Step>,
}

impl ProcessingPlan {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if no step appears before a step that must precede it, and no
    /// kind of step appears twice.
    pub fn is_ordered(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].rank() < w[1].rank())
    }

    /// Split into the geometry prefix (everything before the crop) and the
    /// finishing suffix (crop onwards).
    pub fn split_at_crop(&self) -> (&[Step], &[Step]) {
        let at = self
            .steps
            .iter()
            .position(|s| matches!(s, Step::Crop { .. }))
            .unwrap_or(self.steps.len());
        self.steps.split_at(at)
    }

    /// Size of the quality resize, if the plan has one.
    pub fn resize_size(&self) -> Option<Size> {
        self.steps.iter().find_map(|s| match s {
            Step::Resize { size } => Some(*size),
            _ => None,
        })
    }

    pub fn crop(&self) -> Option<CropRegion> {
        self.steps.iter().find_map(|s| match s {
            Step::Crop { region } => Some(*region),
            _ => None,
        })
    }
}

/// Plan the geometry prefix: resize, then rotation and zoom when they are
/// not near-identity.
///
/// # Errors
///
/// `InvalidImage` for an empty source, `InvalidInput` for a non-positive or
/// non-finite resize scale or zoom, or a non-finite rotation.
pub fn plan_geometry(
    source: Size,
    resize_scale: f64,
    rotation_deg: f64,
    zoom: f64,
) -> Result<ProcessingPlan, AlignError> {
    if source.is_empty() {
        return Err(AlignError::InvalidImage {
            width: source.width,
            height: source.height,
        });
    }
    if !(resize_scale.is_finite() && resize_scale > 0.0) {
        return Err(invalid_input(format!(
            "resize scale must be positive and finite, got {resize_scale}"
        )));
    }
    if !(zoom.is_finite() && zoom > 0.0) || !rotation_deg.is_finite() {
        return Err(invalid_input(format!(
            "zoom must be positive and rotation finite, got zoom {zoom}, rotation {rotation_deg}"
        )));
    }

    let mut steps = vec![Step::Resize {
        size: source.scaled(resize_scale),
    }];
    if rotation_deg.abs() >= ROTATION_EPSILON_DEG {
        steps.push(Step::Rotate {
            degrees: rotation_deg,
        });
    }
    if effective_zoom(zoom) != 1.0 {
        steps.push(Step::ZoomResize { factor: zoom });
    }

    Ok(ProcessingPlan { steps })
}

/// Plan the full pipeline for a solved crop.
///
/// The result always starts with exactly what [`plan_geometry`] returns for
/// the same arguments, followed by crop, resize-to and a horizontal flip
/// (matching mirrored front-camera captures).
pub fn plan(
    source: Size,
    resize_scale: f64,
    rotation_deg: f64,
    zoom: f64,
    crop: CropRegion,
    target_side: u32,
) -> Result<ProcessingPlan, AlignError> {
    if crop.side == 0 {
        return Err(invalid_input("crop side must be positive"));
    }
    if target_side == 0 {
        return Err(invalid_input("target side must be positive"));
    }

    let mut plan = plan_geometry(source, resize_scale, rotation_deg, zoom)?;
    plan.steps.extend([
        Step::Crop { region: crop },
        Step::ResizeTo { side: target_side },
        Step::Flip { horizontal: true },
    ]);

    Ok(plan)
}
