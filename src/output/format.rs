use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::QuadsheetError;

/// Appended to the input's base name to form the sprite strip file name
pub const SHEET_SUFFIX: &str = "_quadrants_spritesheet";

/// Output path for a sprite strip built from `input`:
/// `{output_dir}/{input_stem}_quadrants_spritesheet.png`
pub fn sheet_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("image"));

    let mut name = OsString::from(stem);
    name.push(SHEET_SUFFIX);
    name.push(".png");

    output_dir.join(name)
}

/// Save a sprite strip as PNG, optionally with compression.
///
/// The whole file is encoded in memory first and written with a single
/// call, so an encoding failure never leaves a partial file behind.
/// Returns the number of bytes written.
pub fn save_sheet_image(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<usize> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| QuadsheetError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            QuadsheetError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, &output_data).map_err(|e| QuadsheetError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(output_data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_sheet_path_uses_stem_and_suffix() {
        let path = sheet_path(Path::new("art/boldjumper.png"), Path::new("/tmp/sheets"));
        assert_eq!(
            path,
            PathBuf::from("/tmp/sheets/boldjumper_quadrants_spritesheet.png")
        );
    }

    #[test]
    fn test_sheet_path_replaces_any_extension() {
        let path = sheet_path(Path::new("hero.final.gif"), Path::new("out"));
        assert_eq!(
            path,
            PathBuf::from("out/hero.final_quadrants_spritesheet.png")
        );

        let path = sheet_path(Path::new("noext"), Path::new("out"));
        assert_eq!(path, PathBuf::from("out/noext_quadrants_spritesheet.png"));
    }

    #[test]
    fn test_save_preserves_transparency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        let mut img = RgbaImage::new(8, 2);
        img.put_pixel(3, 1, Rgba([255, 0, 0, 64]));

        let written = save_sheet_image(&img, &path, None).unwrap();
        assert_eq!(written as u64, fs::metadata(&path).unwrap().len());

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_compressed_output_decodes_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        let mut img = RgbaImage::new(16, 4);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            if x % 2 == 0 {
                *pixel = Rgba([0, 128, 255, 255]);
            }
        }

        save_sheet_image(&img, &path, Some(CompressionLevel::Level(1))).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("strip.png");
        let img = RgbaImage::new(4, 2);

        let err = save_sheet_image(&img, &path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuadsheetError>(),
            Some(QuadsheetError::OutputWrite { .. })
        ));
        assert!(!path.exists());
    }
}
