//! Framealign Core - progress-photo alignment and crop solving
//!
//! Turns what the user framed in a square preview (pan, zoom and rotation
//! over a fitted image) into the exact square crop of the processed image,
//! plus the ordered list of primitive operations that produce it.
//!
//! The geometry is pure. Pixel work is delegated to an [`ImageOps`]
//! backend; [`RasterOps`] is the in-memory one used by the WASM bindings.

pub mod commit;
pub mod config;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod ops;
pub mod plan;
pub mod raster;
pub mod transform;

pub use commit::{commit, Committed};
pub use config::AlignerConfig;
pub use error::AlignError;
pub use geometry::{
    CropRegion, Point, Rect, Size, TransformLimits, ViewTransform, ViewportSpec, MAX_ROTATION_DEG,
    MAX_ZOOM, MIN_ZOOM,
};
pub use ops::{execute, ImageOps};
pub use plan::{plan, plan_geometry, ProcessingPlan, Step};
pub use raster::{RasterOps, ResizeFilter};
pub use transform::{compose_scales, fit, quality_resize_scale, solve, DisplayFit, ScaleBundle};
