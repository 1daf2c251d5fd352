//! Fitting a source photo into the square preview viewport.
//!
//! The display width is always pinned to the viewport side; the height
//! follows from the aspect ratio. Portrait photos are therefore taller than
//! the viewport and start out scrolled to their vertical middle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{invalid_input, AlignError};
use crate::geometry::{Point, Size, ViewTransform, ViewportSpec};

/// Display size of a photo in the viewport plus its centering pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFit {
    pub size: Size,
    pub default_pan: Point,
}

impl DisplayFit {
    /// The transform a freshly selected photo starts with.
    pub fn default_transform(&self) -> ViewTransform {
        ViewTransform::reset(self.default_pan)
    }
}

/// Compute the display size and default pan of `source` in `viewport`.
///
/// # Errors
///
/// - `InvalidImage` if either source dimension is zero
/// - `InvalidInput` if the viewport side is zero
pub fn fit(source: Size, viewport: ViewportSpec) -> Result<DisplayFit, AlignError> {
    if source.is_empty() {
        return Err(AlignError::InvalidImage {
            width: source.width,
            height: source.height,
        });
    }
    if viewport.side == 0 {
        return Err(invalid_input("viewport side must be positive"));
    }

    let side = viewport.side as f64;
    let aspect = source.aspect_ratio();

    // f64::round is half-away-from-zero, which is half-up for positive values.
    let height = ((side / aspect).round() as u32).max(1);
    let size = Size::new(viewport.side, height);

    let default_pan = if aspect < 1.0 {
        Point::new(0.0, (height as f64 - side) / 2.0)
    } else {
        Point::ORIGIN
    };

    debug!(
        source_width = source.width,
        source_height = source.height,
        display_height = height,
        pan_y = default_pan.y,
        "fitted photo to viewport"
    );

    Ok(DisplayFit { size, default_pan })
}

/// Scale of the quality resize that runs before rotation.
///
/// Chosen so the longest source edge becomes `headroom` viewport sides,
/// leaving room for rotation and zoom without visible softening.
pub fn quality_resize_scale(
    source: Size,
    viewport: ViewportSpec,
    headroom: f64,
) -> Result<f64, AlignError> {
    if source.is_empty() {
        return Err(AlignError::InvalidImage {
            width: source.width,
            height: source.height,
        });
    }
    if viewport.side == 0 || !(headroom.is_finite() && headroom > 0.0) {
        return Err(invalid_input(format!(
            "quality resize needs a positive viewport and headroom (side {}, headroom {})",
            viewport.side, headroom
        )));
    }

    Ok(headroom * viewport.side as f64 / source.max_side() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportSpec = ViewportSpec::new(1080);

    #[test]
    fn test_fit_portrait() {
        let fit = fit(Size::new(3000, 4000), VIEWPORT).unwrap();
        assert_eq!(fit.size, Size::new(1080, 1440));
        assert_eq!(fit.default_pan, Point::new(0.0, 180.0));
    }

    #[test]
    fn test_fit_landscape() {
        let fit = fit(Size::new(4000, 3000), VIEWPORT).unwrap();
        assert_eq!(fit.size, Size::new(1080, 810));
        assert_eq!(fit.default_pan, Point::ORIGIN);
    }

    #[test]
    fn test_fit_square() {
        let fit = fit(Size::new(2000, 2000), VIEWPORT).unwrap();
        assert_eq!(fit.size, Size::new(1080, 1080));
        assert_eq!(fit.default_pan, Point::ORIGIN);
    }

    #[test]
    fn test_fit_rounds_half_up() {
        // 100 / (200 / 3) = 1.5 -> 2
        let fit = fit(Size::new(200, 3), ViewportSpec::new(100)).unwrap();
        assert_eq!(fit.size.height, 2);
    }

    #[test]
    fn test_fit_extreme_panorama_keeps_positive_height() {
        let fit = fit(Size::new(100_000, 1), VIEWPORT).unwrap();
        assert_eq!(fit.size.height, 1);
    }

    #[test]
    fn test_fit_rejects_empty_source() {
        assert_eq!(
            fit(Size::new(0, 4000), VIEWPORT),
            Err(AlignError::InvalidImage {
                width: 0,
                height: 4000
            })
        );
        assert!(matches!(
            fit(Size::new(3000, 0), VIEWPORT),
            Err(AlignError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_fit_rejects_empty_viewport() {
        assert!(matches!(
            fit(Size::new(10, 10), ViewportSpec::new(0)),
            Err(AlignError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_transform() {
        let fit = fit(Size::new(3000, 4000), VIEWPORT).unwrap();
        let t = fit.default_transform();
        assert_eq!(t.pan, Point::new(0.0, 180.0));
        assert_eq!(t.zoom, 1.0);
        assert_eq!(t.rotation_deg, 0.0);
    }

    #[test]
    fn test_quality_resize_scale() {
        let scale = quality_resize_scale(Size::new(3000, 4000), VIEWPORT, 2.0).unwrap();
        assert!((scale - 0.54).abs() < 1e-12);

        let scale = quality_resize_scale(Size::new(540, 540), VIEWPORT, 2.0).unwrap();
        assert!((scale - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_source_is_the_same_user_facing_error_everywhere() {
        let source = Size::new(0, 4000);
        let expected = AlignError::InvalidImage {
            width: 0,
            height: 4000,
        };

        let from_fit = fit(source, VIEWPORT).unwrap_err();
        let from_scale = quality_resize_scale(source, VIEWPORT, 2.0).unwrap_err();
        let from_plan = crate::plan::plan_geometry(source, 0.5, 0.0, 1.0).unwrap_err();

        assert_eq!(from_fit, expected);
        assert_eq!(from_scale, expected);
        assert_eq!(from_plan, expected);
        assert!(from_fit.is_user_facing());
    }

    #[test]
    fn test_quality_resize_scale_rejects_bad_input() {
        assert!(quality_resize_scale(Size::new(0, 1), VIEWPORT, 2.0).is_err());
        assert!(quality_resize_scale(Size::new(1, 1), VIEWPORT, 0.0).is_err());
        assert!(quality_resize_scale(Size::new(1, 1), VIEWPORT, f64::NAN).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: width is pinned, height is positive, and the default pan
        /// centers portraits and is zero otherwise.
        #[test]
        fn prop_fit_invariants(
            width in 1u32..=10_000,
            height in 1u32..=10_000,
            side in 1u32..=2_000,
        ) {
            let fit = fit(Size::new(width, height), ViewportSpec::new(side)).unwrap();
            prop_assert_eq!(fit.size.width, side);
            prop_assert!(fit.size.height >= 1);

            if width < height {
                prop_assert_eq!(fit.default_pan.x, 0.0);
                prop_assert!(fit.default_pan.y >= 0.0);
                prop_assert!(
                    (fit.default_pan.y - (fit.size.height as f64 - side as f64) / 2.0).abs() < 1e-9
                );
            } else {
                prop_assert_eq!(fit.default_pan, Point::ORIGIN);
            }
        }
    }
}
