//! The crop solver: inverting the preview transform into a square crop of
//! the processed image.
//!
//! # Algorithm
//!
//! 1. Find the display point under the viewport center (`center + pan`).
//! 2. Scale it to original pixels, then to processed pixels. That is the crop
//!    center.
//! 3. The viewport shows `side / zoom` display pixels. Scale that to original
//!    pixels and then by the quality resize only. The processed image was
//!    already enlarged by the zoom step, so using the full
//!    original-to-processed ratio here would count the zoom twice.
//! 4. Take the smaller of the two per-axis sides so the square fits the
//!    tighter axis.
//! 5. Round to whole pixels, shrink the side to the processed image if needed,
//!    then clamp the origin into bounds.

use tracing::debug;

use super::compose::{viewport_to_display, ScaleBundle};
use crate::error::{invalid_input, AlignError};
use crate::geometry::{CropRegion, Rect, Size, ViewTransform, ViewportSpec};

/// Solve the crop region for the current view.
///
/// Never fails for a finite transform: out-of-range pans are clamped into a
/// valid in-bounds square.
///
/// # Errors
///
/// `InvalidInput` if the display size, viewport, scales or transform contain
/// non-positive or non-finite values.
pub fn solve(
    display: Size,
    viewport: ViewportSpec,
    transform: &ViewTransform,
    scales: &ScaleBundle,
) -> Result<CropRegion, AlignError> {
    let exact = solve_unclamped(display, viewport, transform, scales)?;
    let region = clamp_square(exact, scales.processed);

    debug!(
        exact_x = exact.x,
        exact_y = exact.y,
        exact_side = exact.width,
        x = region.x,
        y = region.y,
        side = region.side,
        "solved crop region"
    );

    Ok(region)
}

/// Steps 1-4 of the solver: the exact square in processed coordinates,
/// before rounding and clamping. It may extend past the image.
pub fn solve_unclamped(
    display: Size,
    viewport: ViewportSpec,
    transform: &ViewTransform,
    scales: &ScaleBundle,
) -> Result<Rect, AlignError> {
    if display.is_empty() {
        return Err(invalid_input(format!(
            "display size must be non-empty, got {}x{}",
            display.width, display.height
        )));
    }
    if viewport.side == 0 {
        return Err(invalid_input("viewport side must be positive"));
    }
    if !transform.is_finite() || transform.zoom <= 0.0 {
        return Err(invalid_input(format!(
            "view transform must be finite with positive zoom, got {:?}",
            transform
        )));
    }
    scales.validate()?;

    let center = viewport_to_display(transform, viewport, viewport.center())
        .scale(scales.display_to_original_x, scales.display_to_original_y)
        .scale(scales.original_to_processed_x, scales.original_to_processed_y);

    let visible = viewport.side as f64 / transform.zoom;
    let side_x = visible * scales.display_to_original_x * scales.resize_scale;
    let side_y = visible * scales.display_to_original_y * scales.resize_scale;

    Ok(Rect::square_around(center, side_x.min(side_y)))
}

/// Round a square to whole pixels and move it inside `bounds`.
fn clamp_square(exact: Rect, bounds: Size) -> CropRegion {
    let side = (exact.width.round() as u32).clamp(1, bounds.min_side().max(1));
    let center = exact.center();
    let half = side as f64 / 2.0;

    CropRegion {
        x: clamp_origin(center.x - half, bounds.width - side),
        y: clamp_origin(center.y - half, bounds.height - side),
        side,
    }
}

fn clamp_origin(origin: f64, max_origin: u32) -> u32 {
    if origin <= 0.0 {
        return 0;
    }
    // `as` saturates, so huge origins land on the far edge.
    (origin.round() as u64).min(max_origin as u64) as u32
}
