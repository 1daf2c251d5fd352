//! Error types for alignment and commit operations.

use thiserror::Error;
use tracing::warn;

/// Errors produced while fitting, solving, planning or committing a photo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// The source image has a zero dimension.
    #[error("Invalid source image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// A size handed to the composer is zero, so no scale can be derived.
    #[error("Degenerate transform: {0}")]
    DegenerateTransform(String),

    /// A caller passed a non-positive or non-finite value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The image-manipulation backend failed while running a step.
    #[error("Image operation failed: {0}")]
    Collaborator(String),
}

impl AlignError {
    /// Message shown to the user when a commit fails.
    pub const USER_MESSAGE: &'static str = "Failed to process image, please try another.";

    /// Returns true if the error stems from the photo itself rather than a
    /// bug in the calling layer.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AlignError::InvalidImage { .. } | AlignError::Collaborator(_))
    }

    /// The string to surface in the UI for this error.
    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// Log a caller contract violation and hand the error back.
pub(crate) fn contract_violation(err: AlignError) -> AlignError {
    warn!(error = %err, "rejecting call that violates the input contract");
    err
}

/// Shorthand for a logged `InvalidInput`.
pub(crate) fn invalid_input(message: impl Into<String>) -> AlignError {
    contract_violation(AlignError::InvalidInput(message.into()))
}
