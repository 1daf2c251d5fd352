//! Resampling filters and exact-size resize.

use image::RgbImage;
use serde::{Deserialize, Serialize};

use super::RasterError;
use crate::geometry::Size;

/// Filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeFilter {
    /// Nearest neighbor (fastest, blocky).
    Nearest,
    /// Bilinear (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 (slowest, sharpest). Used for saved photos.
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the image crate's filter type.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize `image` to exactly `size`.
///
/// # Errors
///
/// `RasterError::InvalidDimensions` if `size` has a zero dimension.
pub fn resize_exact(
    image: &RgbImage,
    size: Size,
    filter: ResizeFilter,
) -> Result<RgbImage, RasterError> {
    if size.is_empty() {
        return Err(RasterError::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }

    if image.dimensions() == (size.width, size.height) {
        return Ok(image.clone());
    }

    Ok(image::imageops::resize(
        image,
        size.width,
        size.height,
        filter.to_image_filter(),
    ))
}
