//! The image-manipulation backend interface and the plan executor.
//!
//! The core never touches pixels. A backend implements the four primitives
//! of [`ImageOps`] over its own opaque handle type and reports the size of
//! each result, which the commit flow needs to solve the crop.

use std::fmt::Display;

use tracing::debug;

use crate::error::{invalid_input, AlignError};
use crate::geometry::{CropRegion, Size};
use crate::plan::Step;

/// Primitive operations an image backend must provide.
///
/// Every primitive consumes a handle and returns a new one.
pub trait ImageOps {
    type Handle;
    type Error: Display;

    /// Pixel dimensions of `image`.
    fn dimensions(&self, image: &Self::Handle) -> Size;

    fn resize(&self, image: Self::Handle, size: Size) -> Result<Self::Handle, Self::Error>;

    /// Rotate about the center, expanding the canvas to fit.
    fn rotate(&self, image: Self::Handle, degrees: f64) -> Result<Self::Handle, Self::Error>;

    fn crop(&self, image: Self::Handle, region: CropRegion) -> Result<Self::Handle, Self::Error>;

    fn flip(&self, image: Self::Handle, horizontal: bool) -> Result<Self::Handle, Self::Error>;
}

/// Run `steps` in order, feeding each result into the next step.
///
/// # Errors
///
/// `Collaborator` if a primitive fails, `InvalidInput` if a crop does not
/// fit the image it is applied to.
pub fn execute<O: ImageOps>(
    ops: &O,
    mut image: O::Handle,
    steps: &[Step],
) -> Result<O::Handle, AlignError> {
    for step in steps {
        image = apply_step(ops, image, step)?;
    }
    Ok(image)
}

fn apply_step<O: ImageOps>(ops: &O, image: O::Handle, step: &Step) -> Result<O::Handle, AlignError> {
    let before = ops.dimensions(&image);

    let result = match *step {
        Step::Resize { size } => ops.resize(image, size),
        Step::Rotate { degrees } => ops.rotate(image, degrees),
        Step::ZoomResize { factor } => ops.resize(image, before.scaled(factor)),
        Step::Crop { region } => {
            if !region.fits_within(before) {
                return Err(invalid_input(format!(
                    "crop {:?} does not fit a {}x{} image",
                    region, before.width, before.height
                )));
            }
            ops.crop(image, region)
        }
        Step::ResizeTo { side } => ops.resize(image, Size::new(side, side)),
        Step::Flip { horizontal } => ops.flip(image, horizontal),
    };

    let image = result.map_err(|e| AlignError::Collaborator(format!("{}: {}", step.name(), e)))?;
    let after = ops.dimensions(&image);

    debug!(
        step = step.name(),
        before_width = before.width,
        before_height = before.height,
        after_width = after.width,
        after_height = after.height,
        "applied step"
    );

    Ok(image)
}
