#[cfg(test)]
pub(crate) mod fixtures;
mod loader;

pub use loader::{load_rgba, probe_dimensions};
