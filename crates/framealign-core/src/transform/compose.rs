//! Scale factors between the four coordinate spaces, and the on-screen
//! mapping of the preview transform.
//!
//! ```text
//! display --(display_to_original)--> original --(resize_scale)--> resized
//!                                        \
//!                                         `--(original_to_processed)--> processed
//! ```
//!
//! The processed size comes from the image backend after it has run the
//! resize, rotation and zoom steps. Rotation grows the bounding box, and the
//! backend's measured size is taken as ground truth rather than re-derived
//! here.

use serde::{Deserialize, Serialize};

use crate::error::{contract_violation, invalid_input, AlignError};
use crate::geometry::{Point, Size, ViewTransform, ViewportSpec};

/// Ratios between display, original, resized and processed pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleBundle {
    pub display_to_original_x: f64,
    pub display_to_original_y: f64,
    /// Quality resize applied before rotation (resized / original).
    pub resize_scale: f64,
    pub original_to_processed_x: f64,
    pub original_to_processed_y: f64,
    /// Measured size of the image after resize, rotation and zoom.
    pub processed: Size,
}

impl ScaleBundle {
    /// Check that every ratio is strictly positive and finite and that the
    /// processed size is non-empty.
    pub fn validate(&self) -> Result<(), AlignError> {
        let ratios = [
            ("display_to_original_x", self.display_to_original_x),
            ("display_to_original_y", self.display_to_original_y),
            ("resize_scale", self.resize_scale),
            ("original_to_processed_x", self.original_to_processed_x),
            ("original_to_processed_y", self.original_to_processed_y),
        ];
        for (name, value) in ratios {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid_input(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.processed.is_empty() {
            return Err(invalid_input(format!(
                "processed size must be non-empty, got {}x{}",
                self.processed.width, self.processed.height
            )));
        }
        Ok(())
    }
}

/// Derive the scale bundle from measured sizes.
///
/// # Errors
///
/// `DegenerateTransform` if any of the four sizes has a zero dimension.
pub fn compose_scales(
    source: Size,
    display: Size,
    resized: Size,
    processed: Size,
) -> Result<ScaleBundle, AlignError> {
    for (name, size) in [
        ("source", source),
        ("display", display),
        ("resized", resized),
        ("processed", processed),
    ] {
        if size.is_empty() {
            return Err(contract_violation(AlignError::DegenerateTransform(
                format!("{name} size is {}x{}", size.width, size.height),
            )));
        }
    }

    let (src_w, src_h) = (source.width as f64, source.height as f64);

    Ok(ScaleBundle {
        display_to_original_x: src_w / display.width as f64,
        display_to_original_y: src_h / display.height as f64,
        resize_scale: resized.width as f64 / src_w,
        original_to_processed_x: processed.width as f64 / src_w,
        original_to_processed_y: processed.height as f64 / src_h,
        processed,
    })
}

/// Map a display-space point to where it is drawn in the viewport.
///
/// The preview translates the image by `-pan`, then rotates by
/// `rotation_deg` and scales by `zoom` about the viewport center. Angles
/// follow screen convention (y down), so positive degrees turn clockwise.
pub fn display_to_viewport(transform: &ViewTransform, viewport: ViewportSpec, p: Point) -> Point {
    let c = viewport.center();
    let (sin, cos) = transform.rotation_deg.to_radians().sin_cos();

    let dx = p.x - transform.pan.x - c.x;
    let dy = p.y - transform.pan.y - c.y;

    Point::new(
        c.x + transform.zoom * (dx * cos - dy * sin),
        c.y + transform.zoom * (dx * sin + dy * cos),
    )
}

/// Inverse of [`display_to_viewport`]: which display point is drawn at `v`.
///
/// The viewport center always maps back to `center + pan`, whatever the
/// zoom and rotation.
pub fn viewport_to_display(transform: &ViewTransform, viewport: ViewportSpec, v: Point) -> Point {
    let c = viewport.center();
    let (sin, cos) = transform.rotation_deg.to_radians().sin_cos();

    let dx = (v.x - c.x) / transform.zoom;
    let dy = (v.y - c.y) / transform.zoom;

    Point::new(
        c.x + transform.pan.x + dx * cos + dy * sin,
        c.y + transform.pan.y - dx * sin + dy * cos,
    )
}
