use thiserror::Error;

/// Enum representing the errors reported by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input image buffer contains no pixels.
    #[error("The image data is empty and cannot be processed.")]
    EmptyImageData,

    /// The palette contains no swatches.
    #[error("The palette does not contain any swatches.")]
    EmptyPalette,

    /// The given string is not a supported hex color notation.
    #[error("'{0}' is not a valid hex color string")]
    InvalidHexString(String),

    /// A parameter is outside its valid range.
    #[error("invalid value for `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// The image buffer length does not match the declared dimensions.
    #[error("the image buffer holds {actual} bytes, expected {expected}")]
    ImageSizeMismatch { expected: usize, actual: usize },

    /// The extraction was cancelled before completion.
    #[error("The extraction was cancelled.")]
    Cancelled,
}

/// A `Result` alias with this crate's error type.
pub type Result<T> = std::result::Result<T, Error>;
