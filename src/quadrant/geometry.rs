use crate::error::QuadsheetError;

/// One of the four equal corner regions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quadrant {
    /// Clockwise traversal starting at the top-left corner.
    /// This is also the left-to-right slot order in the output strip.
    pub const CLOCKWISE: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// Short label used in log output
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "TL",
            Quadrant::TopRight => "TR",
            Quadrant::BottomRight => "BR",
            Quadrant::BottomLeft => "BL",
        }
    }

    /// Position of this quadrant in the output strip (0 = leftmost)
    pub fn slot(self) -> u32 {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomRight => 2,
            Quadrant::BottomLeft => 3,
        }
    }

    fn is_right(self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }

    fn is_bottom(self) -> bool {
        matches!(self, Quadrant::BottomRight | Quadrant::BottomLeft)
    }
}

/// Axis-aligned box covering `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    #[cfg(test)]
    fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Quadrant geometry for a source image with even dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantLayout {
    pub half_width: u32,
    pub half_height: u32,
}

impl QuadrantLayout {
    /// Validate source dimensions and compute half extents.
    ///
    /// Odd widths or heights cannot be divided exactly and are rejected
    /// rather than rounded.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, QuadsheetError> {
        if width % 2 != 0 || height % 2 != 0 {
            return Err(QuadsheetError::InvalidDimensions { width, height });
        }

        Ok(Self {
            half_width: width / 2,
            half_height: height / 2,
        })
    }

    /// Source box of a quadrant
    pub fn source_region(&self, quadrant: Quadrant) -> Region {
        Region {
            x: if quadrant.is_right() { self.half_width } else { 0 },
            y: if quadrant.is_bottom() { self.half_height } else { 0 },
            width: self.half_width,
            height: self.half_height,
        }
    }

    /// Horizontal offset of the given strip slot
    pub fn slot_offset(&self, slot: u32) -> u32 {
        self.half_width * slot
    }

    /// Output strip size: four quadrants side by side
    pub fn sheet_size(&self) -> (u32, u32) {
        (self.half_width * 4, self.half_height)
    }
}
