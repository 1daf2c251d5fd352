//! Encoding of committed photos for storage.
//!
//! Saved progress photos are square RGB images written as JPEG. Quality comes
//! from [`AlignerConfig::jpeg_quality`](crate::config::AlignerConfig).

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
