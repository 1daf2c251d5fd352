//! Value types shared by the fitter, composer, solver and planner.
//!
//! Sizes and crop regions are whole pixels. Points, rectangles and the view
//! transform are floating point because they carry intermediate results of
//! unit conversions.

use serde::{Deserialize, Serialize};

/// Smallest zoom the preview allows (no magnification).
pub const MIN_ZOOM: f64 = 1.0;

/// Largest zoom the preview allows (70% magnification).
pub const MAX_ZOOM: f64 = 1.7;

/// Largest absolute rotation the preview allows, in degrees.
pub const MAX_ROTATION_DEG: f64 = 20.0;

/// Pixel dimensions of an image or viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height. Callers must reject empty sizes first.
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    pub fn max_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Scale both dimensions, rounding to the nearest pixel (at least 1).
    pub fn scaled(self, factor: f64) -> Size {
        let scale = |v: u32| ((v as f64 * factor).round() as u32).max(1);
        Size::new(scale(self.width), scale(self.height))
    }
}

/// A point in some pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise scale.
    pub fn scale(self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle with a floating-point origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square of the given side centered on `center`.
    pub fn square_around(center: Point, side: f64) -> Rect {
        Rect::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if the rectangle lies entirely inside `[0, size]` on both axes.
    pub fn fits_within(&self, size: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= size.width as f64
            && self.y + self.height <= size.height as f64
    }
}

/// The fixed square preview region of the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSpec {
    pub side: u32,
}

impl ViewportSpec {
    pub const fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn size(self) -> Size {
        Size::new(self.side, self.side)
    }

    pub fn center(self) -> Point {
        let half = self.side as f64 / 2.0;
        Point::new(half, half)
    }
}

/// Ranges the gesture layer clamps the view transform into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_rotation_deg: f64,
}

impl Default for TransformLimits {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            max_rotation_deg: MAX_ROTATION_DEG,
        }
    }
}

/// The user's live manipulation of the preview.
///
/// `pan` is the offset of the viewport into the fitted display image, in
/// display pixels: the image layer is drawn translated by `-pan`, then
/// rotated by `rotation_deg` and scaled by `zoom` about the viewport center.
///
/// Every helper returns a new value; the solver only ever reads one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub pan: Point,
    pub zoom: f64,
    pub rotation_deg: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Point::ORIGIN,
            zoom: MIN_ZOOM,
            rotation_deg: 0.0,
        }
    }
}

impl ViewTransform {
    /// Build a transform as-is, without clamping.
    pub fn new(pan: Point, zoom: f64, rotation_deg: f64) -> Self {
        Self {
            pan,
            zoom,
            rotation_deg,
        }
    }

    /// The recentering default for a freshly selected (or reset) image.
    pub fn reset(default_pan: Point) -> Self {
        Self {
            pan: default_pan,
            ..Self::default()
        }
    }

    pub fn with_pan(self, pan: Point) -> Self {
        Self { pan, ..self }
    }

    pub fn pan_by(self, dx: f64, dy: f64) -> Self {
        self.with_pan(self.pan.offset(dx, dy))
    }

    /// Set the zoom, clamped to the default limits.
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }.clamped(&TransformLimits::default())
    }

    /// Multiply the zoom by `factor`, clamped to the default limits.
    pub fn zoom_by(self, factor: f64) -> Self {
        self.with_zoom(self.zoom * factor)
    }

    /// Set the rotation, clamped to the default limits.
    pub fn with_rotation(self, rotation_deg: f64) -> Self {
        Self {
            rotation_deg,
            ..self
        }
        .clamped(&TransformLimits::default())
    }

    pub fn rotate_by(self, delta_deg: f64) -> Self {
        self.with_rotation(self.rotation_deg + delta_deg)
    }

    /// Clamp zoom and rotation into `limits`. Pan is never clamped.
    pub fn clamped(self, limits: &TransformLimits) -> Self {
        Self {
            pan: self.pan,
            zoom: self.zoom.clamp(limits.min_zoom, limits.max_zoom),
            rotation_deg: self
                .rotation_deg
                .clamp(-limits.max_rotation_deg, limits.max_rotation_deg),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pan.is_finite() && self.zoom.is_finite() && self.rotation_deg.is_finite()
    }
}

/// The square crop, in processed-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

impl CropRegion {
    pub const fn new(x: u32, y: u32, side: u32) -> Self {
        Self { x, y, side }
    }

    pub fn right(&self) -> u64 {
        self.x as u64 + self.side as u64
    }

    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.side as u64
    }

    /// True if the region is non-empty and lies inside an image of `size`.
    pub fn fits_within(&self, size: Size) -> bool {
        self.side > 0 && self.right() <= size.width as u64 && self.bottom() <= size.height as u64
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.side as f64,
            self.side as f64,
        )
    }
}
