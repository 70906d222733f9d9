//! Raw frame dump to TIFF conversion for the MT9M001 image sensor.
//!
//! The capture firmware streams each frame as little-endian 32-bit words
//! carrying three 10-bit samples apiece, most-significant-bit-first on the
//! wire. [`frame_pipeline`] decodes those dumps into row-major 16-bit
//! grayscale rasters and writes them out as TIFF.

pub mod frame_pipeline;
pub mod logger;
