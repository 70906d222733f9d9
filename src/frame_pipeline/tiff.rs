//! TIFF writing module
//!
//! This module serializes decoded frames as single-channel 16-bit TIFF files.

mod standard_tiff_writer;
pub mod types;
mod writer;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
pub use writer::TiffWriter;
