use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{RgbaImage, imageops};
use log::{debug, info};

use super::{Quadrant, QuadrantLayout};
use crate::cli::CompressionLevel;
use crate::error::QuadsheetError;
use crate::output::{save_sheet_image, sheet_path};
use crate::sprite::load_rgba;

/// An owned copy of one quadrant of a source image
#[derive(Debug, Clone)]
pub struct QuadrantImage {
    pub quadrant: Quadrant,
    pub image: RgbaImage,
}

/// Options for writing the sprite strip
#[derive(Debug, Clone, Copy, Default)]
pub struct RepackOptions {
    /// Run the encoded PNG through oxipng
    pub compress: Option<CompressionLevel>,
}

/// What a successful repack produced
#[derive(Debug, Clone)]
pub struct RepackSummary {
    pub output_path: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub sheet_width: u32,
    pub sheet_height: u32,
}

/// Copy a single quadrant out of the source image.
///
/// The result owns its pixels; it does not borrow from `source`.
pub fn extract_quadrant(
    source: &RgbaImage,
    layout: &QuadrantLayout,
    quadrant: Quadrant,
) -> RgbaImage {
    let region = layout.source_region(quadrant);
    imageops::crop_imm(source, region.x, region.y, region.width, region.height).to_image()
}

/// Split an image into its four quadrants, in clockwise order.
pub fn split_quadrants(source: &RgbaImage) -> Result<Vec<QuadrantImage>, QuadsheetError> {
    let (width, height) = source.dimensions();
    let layout = QuadrantLayout::from_dimensions(width, height)?;
    Ok(split_quadrants_with(&layout, source))
}

/// Split using an already validated layout.
///
/// `layout` must come from `source`'s own dimensions.
pub fn split_quadrants_with(
    layout: &QuadrantLayout,
    source: &RgbaImage,
) -> Vec<QuadrantImage> {
    Quadrant::CLOCKWISE
        .iter()
        .map(|&quadrant| QuadrantImage {
            quadrant,
            image: extract_quadrant(source, layout, quadrant),
        })
        .collect()
}

/// Paste quadrants into a fresh, fully transparent strip.
///
/// Each quadrant lands in its clockwise slot regardless of its position in
/// `quadrants`. Pasting replaces destination pixels, alpha included; nothing
/// is blended. Slots with no matching quadrant stay transparent.
pub fn compose_strip(layout: &QuadrantLayout, quadrants: &[QuadrantImage]) -> RgbaImage {
    let (sheet_width, sheet_height) = layout.sheet_size();
    let mut canvas = RgbaImage::new(sheet_width, sheet_height);

    for quad in quadrants {
        let x = layout.slot_offset(quad.quadrant.slot());
        debug!(
            "Placing {} ({}x{}) at x={}",
            quad.quadrant.label(),
            quad.image.width(),
            quad.image.height(),
            x
        );
        imageops::replace(&mut canvas, &quad.image, i64::from(x), 0);
    }

    canvas
}

/// Rearrange an image's quadrants into a horizontal strip in memory.
///
/// Output size is always `(4 * (W / 2), H / 2)`.
pub fn repack_image(source: &RgbaImage) -> Result<RgbaImage, QuadsheetError> {
    let (width, height) = source.dimensions();
    let layout = QuadrantLayout::from_dimensions(width, height)?;
    debug!(
        "Source {}x{}, quadrant size {}x{}",
        width, height, layout.half_width, layout.half_height
    );

    let quadrants = split_quadrants_with(&layout, source);
    Ok(compose_strip(&layout, &quadrants))
}

/// Check that the input is an existing file and the output directory exists.
///
/// Runs before any decoding so a typo costs nothing.
pub fn preflight(input: &Path, output_dir: &Path) -> Result<(), QuadsheetError> {
    if !input.is_file() {
        return Err(QuadsheetError::SourceNotFound(input.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(QuadsheetError::DestinationNotFound(output_dir.to_path_buf()));
    }
    Ok(())
}

/// Load `input`, repack its quadrants and write the strip into `output_dir`.
///
/// Exactly one file is written on success and none on failure. The output
/// directory is never created.
pub fn repack_file(
    input: &Path,
    output_dir: &Path,
    options: &RepackOptions,
) -> Result<RepackSummary> {
    preflight(input, output_dir)?;

    let source = load_rgba(input)?;
    let (source_width, source_height) = source.dimensions();
    let sheet = repack_image(&source)?;

    let output_path = sheet_path(input, output_dir);
    let bytes = save_sheet_image(&sheet, &output_path, options.compress)?;
    debug!("Wrote {} bytes", bytes);
    info!(
        "Saved sprite sheet with quadrants to '{}'",
        output_path.display()
    );

    Ok(RepackSummary {
        output_path,
        source_width,
        source_height,
        sheet_width: sheet.width(),
        sheet_height: sheet.height(),
    })
}
