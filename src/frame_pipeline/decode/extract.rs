//! Sample extraction from packed words

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::decode::mode::SensorMode;

/// Splits a raw dump into its packed samples.
///
/// The buffer is read as consecutive little-endian words of
/// `mode.word_width_bits` bits. Each word carries `mode.samples_per_word`
/// samples of `mode.sample_width_bits` bits at bit offsets 0, B, 2B, ...;
/// any bits above the last sample are padding and ignored.
///
/// The output order is the canonical linear sample order: words in buffer
/// order, sub-samples within a word by ascending bit offset. The raster
/// assembler relies on exactly this order, so it must never change.
///
/// Fails with [`ConversionError::InvalidMode`] if the mode is internally
/// inconsistent (the mode's fields are public, so a caller can hand-build one
/// that never went through [`SensorMode::validate`]), and with
/// [`ConversionError::MalformedInput`] if the buffer ends in a partial word.
/// Every masked sample value is valid by construction.
pub fn extract_samples(buffer: &[u8], mode: &SensorMode) -> Result<Vec<u16>> {
    mode.validate()?;

    let word_bytes = mode.word_bytes();
    if buffer.len() % word_bytes != 0 {
        return Err(ConversionError::MalformedInput {
            len: buffer.len(),
            word_bytes,
        });
    }

    let mask = mode.sample_mask();
    let samples_per_word = mode.samples_per_word as usize;
    let mut samples = Vec::with_capacity(buffer.len() / word_bytes * samples_per_word);

    for chunk in buffer.chunks_exact(word_bytes) {
        let mut bytes = [0u8; 8];
        bytes[..word_bytes].copy_from_slice(chunk);
        let word = u64::from_le_bytes(bytes);

        for k in 0..mode.samples_per_word {
            samples.push(((word >> (k * mode.sample_width_bits)) & mask) as u16);
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Packs samples back into little-endian words, the inverse of
    /// `extract_samples` for in-range values.
    fn pack_samples(samples: &[u16], mode: &SensorMode) -> Vec<u8> {
        assert_eq!(samples.len() % mode.samples_per_word as usize, 0);
        let mut buffer = Vec::new();
        for group in samples.chunks(mode.samples_per_word as usize) {
            let mut word = 0u64;
            for (k, &sample) in group.iter().enumerate() {
                word |= (sample as u64) << (k as u32 * mode.sample_width_bits);
            }
            buffer.extend_from_slice(&word.to_le_bytes()[..mode.word_bytes()]);
        }
        buffer
    }

    #[test]
    fn extracts_sub_samples_in_ascending_shift_order() {
        // Low 10 bits = 20, next 10 bits = 12, top bits zero.
        let buffer = 0x0000_3014u32.to_le_bytes();
        let samples = extract_samples(&buffer, &SensorMode::default()).unwrap();
        assert_eq!(samples, vec![20, 12, 0]);
    }

    #[test]
    fn preserves_word_order_across_the_buffer() {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&0x0000_3014u32.to_le_bytes());
        buffer.extend_from_slice(&0x3FFF_FFFFu32.to_le_bytes());
        let samples = extract_samples(&buffer, &SensorMode::default()).unwrap();
        assert_eq!(samples, vec![20, 12, 0, 0x3FF, 0x3FF, 0x3FF]);
    }

    #[test]
    fn pack_extract_round_trip() {
        let mode = SensorMode::default();
        let original: Vec<u16> = (0..999u16).map(|i| (i * 37) % 1024).collect();
        let buffer = pack_samples(&original, &mode);
        assert_eq!(extract_samples(&buffer, &mode).unwrap(), original);
    }

    #[test]
    fn trailing_partial_word_is_malformed() {
        let buffer = [0u8; 7];
        let err = extract_samples(&buffer, &SensorMode::default()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::MalformedInput {
                len: 7,
                word_bytes: 4
            }
        ));
    }

    #[test]
    fn hand_built_inconsistent_mode_is_an_error_not_a_panic() {
        let mode = SensorMode {
            word_width_bits: 0,
            ..SensorMode::default()
        };
        assert!(matches!(
            extract_samples(&[], &mode).unwrap_err(),
            ConversionError::InvalidMode(_)
        ));

        let mode = SensorMode {
            sample_width_bits: 64,
            output_width_bits: 64,
            samples_per_word: 1,
            word_width_bits: 64,
            ..SensorMode::default()
        };
        assert!(matches!(
            extract_samples(&[0u8; 8], &mode).unwrap_err(),
            ConversionError::InvalidMode(_)
        ));
    }

    #[test]
    fn empty_buffer_yields_no_samples() {
        let samples = extract_samples(&[], &SensorMode::default()).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn supports_sixteen_bit_words() {
        let mode = SensorMode::builder()
            .word_width_bits(16)
            .sample_width_bits(10)
            .samples_per_word(1)
            .build();
        let buffer = 0xFE14u16.to_le_bytes();
        // Only the low 10 bits survive the mask.
        assert_eq!(extract_samples(&buffer, &mode).unwrap(), vec![0x214]);
    }
}
