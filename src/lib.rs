pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod output;
pub mod quadrant;
pub mod sprite;

pub use cli::{CliArgs, Command, CompressionLevel};
pub use error::QuadsheetError;
pub use inspect::{SheetReport, inspect_sheet};
pub use quadrant::{Quadrant, QuadrantLayout, RepackOptions, repack_file, repack_image};
