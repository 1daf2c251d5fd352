//! Alignment geometry: fitting, scale composition and crop solving.
//!
//! # Coordinate Spaces
//!
//! - **Display**: the photo as fitted into the viewport, width pinned to the
//!   viewport side, before pan/rotate/zoom are drawn
//! - **Original**: pixels of the source photo
//! - **Resized**: original scaled by the quality resize
//! - **Processed**: resized, then rotated (canvas expanded) and zoomed, as
//!   measured by the image backend
//!
//! # Transform Order
//!
//! The preview draws translate → rotate → scale. The export pipeline runs
//! resize → rotate → zoom-resize → crop → resize-to-target → flip. The solver
//! maps the point under the viewport center through both.
//!
//! Origin is the top-left corner in every space; y grows downward.

mod compose;
mod fit;
mod solve;

pub use compose::{compose_scales, display_to_viewport, viewport_to_display, ScaleBundle};
pub use fit::{fit, quality_resize_scale, DisplayFit};
pub use solve::{solve, solve_unclamped};
