use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::QuadsheetError;

/// Decode an image file into RGBA8.
///
/// Indexed, greyscale and RGB sources are expanded so every pixel carries
/// an alpha channel. The format is sniffed from the file contents, falling
/// back to the extension.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, QuadsheetError> {
    let image = open_reader(path)?
        .decode()
        .map_err(|e| QuadsheetError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(image)
}

/// Read only the header of an image file and return its dimensions.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), QuadsheetError> {
    open_reader(path)?
        .into_dimensions()
        .map_err(|e| QuadsheetError::Decode {
            path: path.to_path_buf(),
            source: e,
        })
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, QuadsheetError> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| QuadsheetError::Decode {
            path: path.to_path_buf(),
            source: e.into(),
        })
}
