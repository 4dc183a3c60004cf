//! Errors

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building bitmaps and shaders or reading images
///
/// Drawing itself never fails; a draw that cannot proceed is skipped
#[derive(Error, Debug)]
pub enum Error {
    /// Transform has a zero determinant
    #[error("transform is not invertible")]
    NonInvertible,

    /// Bitmap or canvas with a zero width or height
    #[error("bitmap dimensions must be non-zero, got {width}x{height}")]
    EmptyBitmap { width: usize, height: usize },

    /// Pixel data does not match the requested dimensions
    #[error("expected {expected} pixels, found {found}")]
    PixelCount { expected: usize, found: usize },

    /// Shader constructed from unusable parameters
    #[error("invalid shader: {0}")]
    InvalidShader(String),

    /// Image decoding or encoding failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
