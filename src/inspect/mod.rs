use std::fmt;
use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::error::QuadsheetError;
use crate::sprite::probe_dimensions;

/// Dimensions of a horizontal sprite sheet and its frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetReport {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frame_count: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl fmt::Display for SheetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sheet size: {}×{}", self.sheet_width, self.sheet_height)?;
        write!(f, "Frame size: {}×{}", self.frame_width, self.frame_height)
    }
}

/// Per-frame size of a sheet holding `frame_count` frames side by side.
///
/// Frame width is plain integer division; a remainder is dropped without
/// complaint.
pub fn frame_dimensions(
    sheet_width: u32,
    sheet_height: u32,
    frame_count: u32,
) -> Result<(u32, u32), QuadsheetError> {
    if frame_count == 0 {
        return Err(QuadsheetError::InvalidFrameCount);
    }
    Ok((sheet_width / frame_count, sheet_height))
}

/// Read a sprite sheet's header and report sheet and frame dimensions.
///
/// Only the image header is read; nothing is written.
pub fn inspect_sheet(path: &Path, frame_count: u32) -> Result<SheetReport> {
    if !path.is_file() {
        return Err(QuadsheetError::SourceNotFound(path.to_path_buf()).into());
    }

    let (sheet_width, sheet_height) = probe_dimensions(path)?;
    let (frame_width, frame_height) = frame_dimensions(sheet_width, sheet_height, frame_count)?;

    let remainder = sheet_width % frame_count;
    if remainder != 0 {
        debug!(
            "Sheet width {} is not a multiple of {} frames ({} px left over)",
            sheet_width, frame_count, remainder
        );
    }

    Ok(SheetReport {
        sheet_width,
        sheet_height,
        frame_count,
        frame_width,
        frame_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_frame_dimensions_even_split() {
        assert_eq!(frame_dimensions(400, 100, 4).unwrap(), (100, 100));
    }

    #[test]
    fn test_frame_dimensions_drops_remainder() {
        assert_eq!(frame_dimensions(402, 100, 4).unwrap(), (100, 100));
        assert_eq!(frame_dimensions(3, 7, 4).unwrap(), (0, 7));
    }

    #[test]
    fn test_zero_frames_rejected() {
        assert!(matches!(
            frame_dimensions(400, 100, 0),
            Err(QuadsheetError::InvalidFrameCount)
        ));
    }

    #[test]
    fn test_inspect_sheet_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.png");
        RgbaImage::new(400, 100).save(&path).unwrap();

        let report = inspect_sheet(&path, 4).unwrap();
        assert_eq!(report.frame_count, 4);
        assert_eq!(report.to_string(), "Sheet size: 400×100\nFrame size: 100×100");
    }

    #[test]
    fn test_inspect_sheet_remainder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.png");
        RgbaImage::new(402, 100).save(&path).unwrap();

        let report = inspect_sheet(&path, 4).unwrap();
        assert_eq!((report.sheet_width, report.sheet_height), (402, 100));
        assert_eq!((report.frame_width, report.frame_height), (100, 100));
        assert_eq!(report.to_string(), "Sheet size: 402×100\nFrame size: 100×100");
    }

    #[test]
    fn test_inspect_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect_sheet(&dir.path().join("gone.png"), 4).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuadsheetError>(),
            Some(QuadsheetError::SourceNotFound(_))
        ));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SheetReport {
            sheet_width: 400,
            sheet_height: 100,
            frame_count: 4,
            frame_width: 100,
            frame_height: 100,
        };
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["sheet_width"], 400);
        assert_eq!(value["frame_width"], 100);
        assert_eq!(value["frame_count"], 4);
    }
}
