//! Unified error types for icon generation.

use thiserror::Error;

/// Fatal errors raised while generating an icon.
///
/// Font resolution problems are handled inside [`crate::FontPolicy`] and
/// never surface here.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("icon size must be a positive number of pixels, got {size}")]
    InvalidSize { size: u32 },
}

pub type IconResult<T> = std::result::Result<T, IconError>;
