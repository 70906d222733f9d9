//! Packed-word frame decoder.
//!
//! This is the production [`FrameDecoder`]: it unpacks the sensor's raw dump
//! format (sub-byte samples packed into fixed-width little-endian words),
//! normalizes each sample by bit reversal, and reshapes the result into the
//! configured raster. The whole decode is a pure function of the buffer and
//! the mode; it performs no I/O and holds no state between calls.

use tracing::debug;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::decode::assemble::assemble_grid;
use crate::frame_pipeline::decode::decoder::FrameDecoder;
use crate::frame_pipeline::decode::extract::extract_samples;
use crate::frame_pipeline::decode::mode::SensorMode;
use crate::frame_pipeline::decode::normalize::normalize_sample;
use crate::frame_pipeline::decode::types::ImageGrid;

pub struct PackedFrameDecoder {
    mode: SensorMode,
}

impl PackedFrameDecoder {
    /// Creates a decoder for the given readout mode.
    ///
    /// Fails with [`crate::frame_pipeline::ConversionError::InvalidMode`] if
    /// the mode is internally inconsistent (see [`SensorMode::validate`]).
    pub fn new(mode: SensorMode) -> Result<Self> {
        mode.validate()?;
        Ok(Self { mode })
    }

    pub fn mode(&self) -> &SensorMode {
        &self.mode
    }
}

impl FrameDecoder for PackedFrameDecoder {
    /// Decodes one raw frame dump into a grayscale grid.
    ///
    /// Either the whole frame decodes or the call fails with no partial
    /// output; the three stages cannot half-succeed.
    fn decode_frame(&self, data: &[u8]) -> Result<ImageGrid> {
        debug!("Decoding packed frame, {} bytes", data.len());

        let raw = extract_samples(data, &self.mode)?;
        let output_width_bits = self.mode.output_width_bits;
        let normalized: Vec<u16> = raw
            .into_iter()
            .map(|sample| normalize_sample(sample, output_width_bits))
            .collect();

        let grid = assemble_grid(normalized, self.mode.width, self.mode.height)?;

        debug!("Decoded frame: {}x{}", grid.width, grid.height);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_pipeline::common::error::ConversionError;

    fn three_by_one_mode() -> SensorMode {
        SensorMode::builder().width(3).height(1).build()
    }

    #[test]
    fn decodes_one_word_into_a_single_row() {
        // Low 10 bits = 20, next 10 bits = 12, third sample 0.
        let buffer = 0x0000_3014u32.to_le_bytes();
        let decoder = PackedFrameDecoder::new(three_by_one_mode()).unwrap();

        let grid = decoder.decode_frame(&buffer).unwrap();
        // bitrev10(20) = 160, bitrev10(12) = 192, each scaled by 2^6.
        assert_eq!(grid.row(0), &[0x2800, 0x3000, 0x0000]);
    }

    #[test]
    fn sample_count_mismatch_surfaces_as_dimension_error() {
        let mode = SensorMode::builder().width(4).height(1).build();
        let decoder = PackedFrameDecoder::new(mode).unwrap();

        // One word yields 3 samples, not 4.
        let err = decoder.decode_frame(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, ConversionError::DimensionMismatch { .. }));
    }

    #[test]
    fn partial_word_surfaces_as_malformed_input() {
        let decoder = PackedFrameDecoder::new(three_by_one_mode()).unwrap();
        let err = decoder.decode_frame(&[0u8; 5]).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedInput { .. }));
    }

    #[test]
    fn inconsistent_mode_is_rejected_at_construction() {
        let mode = SensorMode::builder()
            .sample_width_bits(11)
            .samples_per_word(3)
            .build();
        assert!(PackedFrameDecoder::new(mode).is_err());
    }
}
