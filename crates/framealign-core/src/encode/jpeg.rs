//! JPEG output for committed photos.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use thiserror::Error;

/// Errors from the JPEG encoder.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The buffer is not `width * height * 3` bytes long.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a raw RGB buffer (3 bytes per pixel, row-major) as JPEG.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an in-memory image, typically the output of
/// [`commit`](crate::commit::commit) with [`RasterOps`](crate::raster::RasterOps).
pub fn encode_image(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    encode_jpeg(image.as_raw(), width, height, quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn has_jpeg_markers(bytes: &[u8]) -> bool {
        bytes.len() >= 4 && bytes[..2] == [0xFF, 0xD8] && bytes[bytes.len() - 2..] == [0xFF, 0xD9]
    }

    #[test]
    fn test_encode_square_photo() {
        let pixels = vec![128u8; 64 * 64 * 3];
        let jpeg = encode_jpeg(&pixels, 64, 64, 90).unwrap();
        assert!(has_jpeg_markers(&jpeg));
    }

    #[test]
    fn test_encode_image_matches_raw() {
        let img = RgbImage::from_fn(32, 32, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 64]));
        let from_image = encode_image(&img, 85).unwrap();
        let from_raw = encode_jpeg(img.as_raw(), 32, 32, 85).unwrap();
        assert_eq!(from_image, from_raw);
    }

    #[test]
    fn test_quality_is_clamped() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let short = vec![0u8; 9 * 10 * 3];
        assert!(matches!(
            encode_jpeg(&short, 10, 10, 90),
            Err(EncodeError::InvalidPixelData {
                expected: 300,
                actual: 270
            })
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 10, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_higher_quality_keeps_more_detail() {
        let img = RgbImage::from_fn(48, 48, |x, y| {
            Rgb([((x * 37 + y * 11) % 256) as u8, ((x * y) % 256) as u8, 90])
        });
        let low = encode_image(&img, 10).unwrap();
        let high = encode_image(&img, 100).unwrap();
        assert!(high.len() > low.len());
    }
}
