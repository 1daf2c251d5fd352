//! Reference image backend over in-memory RGB buffers.
//!
//! [`RasterOps`] implements [`ImageOps`] with the `image` crate so the whole
//! commit flow can run without a host image library: in tests, and in the
//! WASM bindings.

mod resize;
mod rotation;

use thiserror::Error;

use crate::geometry::{CropRegion, Size};
use crate::ops::ImageOps;

pub use image::RgbImage;
pub use resize::{resize_exact, ResizeFilter};
pub use rotation::{rotate_expanded, rotated_bounds};

/// Errors from the raster backend.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A target size has a zero dimension.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel buffer length does not match width * height * 3.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// The crop region extends past the image.
    #[error("Crop {region:?} exceeds image bounds {width}x{height}")]
    CropOutOfBounds {
        region: CropRegion,
        width: u32,
        height: u32,
    },
}

/// Build an RGB image from a raw row-major buffer (3 bytes per pixel).
pub fn image_from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<RgbImage, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    let expected = width as usize * height as usize * 3;
    let actual = pixels.len();
    RgbImage::from_raw(width, height, pixels)
        .ok_or(RasterError::BufferMismatch { expected, actual })
}

/// [`ImageOps`] backed by `image::RgbImage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOps {
    pub filter: ResizeFilter,
}

impl RasterOps {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }
}

impl ImageOps for RasterOps {
    type Handle = RgbImage;
    type Error = RasterError;

    fn dimensions(&self, image: &RgbImage) -> Size {
        let (width, height) = image.dimensions();
        Size::new(width, height)
    }

    fn resize(&self, image: RgbImage, size: Size) -> Result<RgbImage, RasterError> {
        resize_exact(&image, size, self.filter)
    }

    fn rotate(&self, image: RgbImage, degrees: f64) -> Result<RgbImage, RasterError> {
        Ok(rotate_expanded(&image, degrees))
    }

    fn crop(&self, image: RgbImage, region: CropRegion) -> Result<RgbImage, RasterError> {
        let (width, height) = image.dimensions();
        if !region.fits_within(Size::new(width, height)) {
            return Err(RasterError::CropOutOfBounds {
                region,
                width,
                height,
            });
        }
        Ok(image::imageops::crop_imm(&image, region.x, region.y, region.side, region.side).to_image())
    }

    fn flip(&self, image: RgbImage, horizontal: bool) -> Result<RgbImage, RasterError> {
        Ok(if horizontal {
            image::imageops::flip_horizontal(&image)
        } else {
            image::imageops::flip_vertical(&image)
        })
    }
}
