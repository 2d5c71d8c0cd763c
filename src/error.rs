use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadsheetError {
    #[error("Input image not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Output directory not found: {0}")]
    DestinationNotFound(PathBuf),

    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image dimensions must be even to split into quadrants (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Frame count must be a positive integer")]
    InvalidFrameCount,

    #[error("Failed to encode image '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
