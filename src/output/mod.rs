mod format;

pub use format::{SHEET_SUFFIX, save_sheet_image, sheet_path};
