//! Rotation about the image center onto an expanded canvas.
//!
//! Uses inverse mapping: each output pixel is rotated back into the source
//! and sampled bilinearly. Pixels that fall outside the source are black.
//!
//! ```text
//! src_x = (dst_x - dst_cx) * cos(-θ) - (dst_y - dst_cy) * sin(-θ) + src_cx
//! src_y = (dst_x - dst_cx) * sin(-θ) + (dst_y - dst_cy) * cos(-θ) + src_cy
//! ```

use image::{Rgb, RgbImage};

use crate::geometry::Size;

/// Angles closer to a multiple of 90° than this are treated as exact.
const ANGLE_EPSILON: f64 = 0.001;

/// Bounding box of `size` rotated by `degrees`.
pub fn rotated_bounds(size: Size, degrees: f64) -> Size {
    let quarter_turns = degrees / 90.0;
    let nearest = quarter_turns.round();

    if (quarter_turns - nearest).abs() * 90.0 < ANGLE_EPSILON {
        // Exact multiples of 90 degrees only ever swap the axes.
        return if (nearest as i64).rem_euclid(2) == 0 {
            size
        } else {
            Size::new(size.height, size.width)
        };
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (w, h) = (size.width as f64, size.height as f64);

    Size::new(
        ((w * cos + h * sin).round() as u32).max(1),
        ((w * sin + h * cos).round() as u32).max(1),
    )
}

/// Rotate `image` by `degrees` about its center. The canvas grows to the
/// rotated bounding box so no content is clipped.
pub fn rotate_expanded(image: &RgbImage, degrees: f64) -> RgbImage {
    if degrees.abs() < ANGLE_EPSILON {
        return image.clone();
    }

    let (src_w, src_h) = image.dimensions();
    let bounds = rotated_bounds(Size::new(src_w, src_h), degrees);

    // Negated so that sampling runs from destination back to source.
    let (sin, cos) = (-degrees.to_radians()).sin_cos();
    let (src_cx, src_cy) = (src_w as f64 / 2.0, src_h as f64 / 2.0);
    let (dst_cx, dst_cy) = (bounds.width as f64 / 2.0, bounds.height as f64 / 2.0);

    RgbImage::from_fn(bounds.width, bounds.height, |x, y| {
        let dx = x as f64 - dst_cx;
        let dy = y as f64 - dst_cy;
        sample_bilinear(
            image,
            dx * cos - dy * sin + src_cx,
            dx * sin + dy * cos + src_cy,
        )
    })
}

fn sample_bilinear(image: &RgbImage, x: f64, y: f64) -> Rgb<u8> {
    let (w, h) = image.dimensions();
    if x < 0.0 || y < 0.0 || x >= (w as f64 - 1.0) || y >= (h as f64 - 1.0) {
        return Rgb([0, 0, 0]);
    }

    let (x0, y0) = (x.floor() as u32, y.floor() as u32);
    let (fx, fy) = (x - x0 as f64, y - y0 as f64);

    let p00 = image.get_pixel(x0, y0);
    let p10 = image.get_pixel(x0 + 1, y0);
    let p01 = image.get_pixel(x0, y0 + 1);
    let p11 = image.get_pixel(x0 + 1, y0 + 1);

    let mut out = [0u8; 3];
    for (c, value) in out.iter_mut().enumerate() {
        let v = p00[c] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[c] as f64 * fx * (1.0 - fy)
            + p01[c] as f64 * (1.0 - fx) * fy
            + p11[c] as f64 * fx * fy;
        *value = v.round().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}
