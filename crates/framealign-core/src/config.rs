//! Tunable settings for the commit flow.
//!
//! Every field has a default, so hosts only pass what they override.

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input, AlignError};
use crate::geometry::{TransformLimits, ViewportSpec};
use crate::raster::ResizeFilter;

/// Settings shared by the UI layer and the commit flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlignerConfig {
    /// Side of the square preview viewport, in display pixels.
    pub viewport_side: u32,
    /// Side of the saved square photo, in pixels.
    pub target_side: u32,
    /// The quality resize makes the longest edge this many viewport sides.
    pub quality_headroom: f64,
    /// Zoom and rotation ranges the gesture layer enforces.
    pub limits: TransformLimits,
    /// Filter for the raster backend's resizes.
    pub resize_filter: ResizeFilter,
    /// JPEG quality for the encoded output (1-100).
    pub jpeg_quality: u8,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            viewport_side: 1080,
            target_side: 1080,
            quality_headroom: 2.0,
            limits: TransformLimits::default(),
            resize_filter: ResizeFilter::default(),
            jpeg_quality: 90,
        }
    }
}

impl AlignerConfig {
    pub fn viewport(&self) -> ViewportSpec {
        ViewportSpec::new(self.viewport_side)
    }

    /// Reject settings no commit could succeed with.
    pub fn validate(&self) -> Result<(), AlignError> {
        if self.viewport_side == 0 || self.target_side == 0 {
            return Err(invalid_input(format!(
                "viewport and target sides must be positive (viewport {}, target {})",
                self.viewport_side, self.target_side
            )));
        }
        if !(self.quality_headroom.is_finite() && self.quality_headroom > 0.0) {
            return Err(invalid_input(format!(
                "quality headroom must be positive, got {}",
                self.quality_headroom
            )));
        }
        let limits = &self.limits;
        if !(limits.min_zoom > 0.0 && limits.min_zoom <= limits.max_zoom)
            || !(limits.max_rotation_deg >= 0.0)
        {
            return Err(invalid_input(format!("invalid transform limits {limits:?}")));
        }
        Ok(())
    }
}
