//! Sensor readout mode description

use crate::frame_pipeline::common::error::{ConversionError, Result};

/// Describes how a sensor packs its samples into the raw dump and what raster
/// shape the decoded frame should have.
///
/// All parameters are explicit; nothing is inferred from buffer content. The
/// defaults describe the MT9M001 readout used by the capture firmware:
/// 3 ten-bit samples per little-endian 32-bit word, expanded to 16-bit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorMode {
    /// Bit width of each packed word in the raw dump (must be a multiple of 8,
    /// at most 64)
    pub word_width_bits: u32,
    /// Bit width of each packed sample
    pub sample_width_bits: u32,
    /// Number of samples packed per word, at bit offsets 0, B, 2B, ...
    pub samples_per_word: u32,
    /// Bit width of each output sample (at most 16)
    pub output_width_bits: u32,
    /// Output raster width in pixels
    pub width: usize,
    /// Output raster height in pixels
    pub height: usize,
}

impl Default for SensorMode {
    fn default() -> Self {
        Self {
            word_width_bits: 32,
            sample_width_bits: 10,
            samples_per_word: 3,
            output_width_bits: 16,
            // 1312 image columns plus 2 calibration columns present in the
            // sensor's raw output; cropping them is the caller's business.
            width: 1312 + 2,
            height: 1048,
        }
    }
}

impl SensorMode {
    pub fn builder() -> SensorModeBuilder {
        SensorModeBuilder::default()
    }

    /// Byte size of one packed word.
    pub fn word_bytes(&self) -> usize {
        (self.word_width_bits / 8) as usize
    }

    /// Mask selecting the low `sample_width_bits` bits of a word.
    ///
    /// Only meaningful for a mode that passes [`SensorMode::validate`]; the
    /// shift overflows for `sample_width_bits >= 64`.
    pub fn sample_mask(&self) -> u64 {
        (1u64 << self.sample_width_bits) - 1
    }

    /// Checks the mode's internal consistency.
    ///
    /// The packed samples must fit in one word, the output width must be
    /// representable in a `u16`, and the word width must be a whole number of
    /// bytes so the dump can be split without a bit cursor.
    pub fn validate(&self) -> Result<()> {
        if self.word_width_bits == 0 || self.word_width_bits > 64 {
            return Err(ConversionError::InvalidMode(format!(
                "word width must be in 1..=64 bits, got {}",
                self.word_width_bits
            )));
        }
        if self.word_width_bits % 8 != 0 {
            return Err(ConversionError::InvalidMode(format!(
                "word width must be a multiple of 8 bits, got {}",
                self.word_width_bits
            )));
        }
        if self.output_width_bits == 0 || self.output_width_bits > 16 {
            return Err(ConversionError::InvalidMode(format!(
                "output width must be in 1..=16 bits, got {}",
                self.output_width_bits
            )));
        }
        if self.sample_width_bits == 0 || self.sample_width_bits > self.output_width_bits {
            return Err(ConversionError::InvalidMode(format!(
                "sample width must be in 1..={} bits, got {}",
                self.output_width_bits, self.sample_width_bits
            )));
        }
        if self.samples_per_word == 0 {
            return Err(ConversionError::InvalidMode(
                "samples per word must be at least 1".to_string(),
            ));
        }
        if self.samples_per_word * self.sample_width_bits > self.word_width_bits {
            return Err(ConversionError::InvalidMode(format!(
                "{} samples of {} bits do not fit in a {}-bit word",
                self.samples_per_word, self.sample_width_bits, self.word_width_bits
            )));
        }
        Ok(())
    }
}

/// Builder for SensorMode
#[derive(Default)]
pub struct SensorModeBuilder {
    word_width_bits: Option<u32>,
    sample_width_bits: Option<u32>,
    samples_per_word: Option<u32>,
    output_width_bits: Option<u32>,
    width: Option<usize>,
    height: Option<usize>,
}

impl SensorModeBuilder {
    pub fn word_width_bits(mut self, bits: u32) -> Self {
        self.word_width_bits = Some(bits);
        self
    }

    pub fn sample_width_bits(mut self, bits: u32) -> Self {
        self.sample_width_bits = Some(bits);
        self
    }

    pub fn samples_per_word(mut self, count: u32) -> Self {
        self.samples_per_word = Some(count);
        self
    }

    pub fn output_width_bits(mut self, bits: u32) -> Self {
        self.output_width_bits = Some(bits);
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn build(self) -> SensorMode {
        let default = SensorMode::default();
        SensorMode {
            word_width_bits: self.word_width_bits.unwrap_or(default.word_width_bits),
            sample_width_bits: self.sample_width_bits.unwrap_or(default.sample_width_bits),
            samples_per_word: self.samples_per_word.unwrap_or(default.samples_per_word),
            output_width_bits: self.output_width_bits.unwrap_or(default.output_width_bits),
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
        }
    }
}
