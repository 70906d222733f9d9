//! Frame processing pipeline module
//!
//! This module turns raw MT9M001 frame dumps into 16-bit grayscale images,
//! with separate modules for frame decoding, TIFF writing, and conversion
//! orchestration.

pub mod common;
pub mod conversions;
pub mod decode;
pub mod tiff;

pub use common::{ConversionError, Result};

pub use decode::{
    FrameDecoder, ImageGrid, PackedFrameDecoder, SensorMode, SensorModeBuilder, assemble_grid,
    extract_samples, normalize_sample,
};

pub use tiff::{ConversionConfig, ConversionConfigBuilder, StandardTiffWriter, TiffWriter};

pub use conversions::{BatchReport, RawToTiffPipeline};
