//! Raw frame decoding module
//!
//! This module decodes the sensor's packed raw dump format in three pure
//! stages: sample extraction, bit-reversal normalization, raster assembly.

mod assemble;
mod decoder;
mod extract;
mod mode;
mod normalize;
mod packed_decoder;
pub mod types;

pub use assemble::assemble_grid;
pub use decoder::FrameDecoder;
pub use extract::extract_samples;
pub use mode::{SensorMode, SensorModeBuilder};
pub use normalize::normalize_sample;
pub use packed_decoder::PackedFrameDecoder;
pub use types::ImageGrid;
