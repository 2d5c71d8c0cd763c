mod geometry;
mod repacker;

pub use geometry::{Quadrant, QuadrantLayout, Region};
pub use repacker::{
    QuadrantImage, RepackOptions, RepackSummary, compose_strip, extract_quadrant, preflight,
    repack_file, repack_image, split_quadrants, split_quadrants_with,
};
