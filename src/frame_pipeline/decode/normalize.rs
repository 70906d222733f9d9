//! Bit-reversal sample normalization
//!
//! The sensor shifts its samples out most-significant-bit first, so a raw
//! B-bit reading interpreted natively by the host has its data bits in the
//! wrong order and sits in the bottom of the output range. Reversing the full
//! O-bit zero-extended word fixes both at once: the data bits come out in
//! display order and land in the top B bits of the output.

/// Maps one raw sample to its `output_width_bits`-wide display value.
///
/// The result's bit `O-1-i` equals the input's bit `i` for every `i` in
/// `0..O`. Because the input's top `O-B` bits are zero, this equals
/// `bitrev_B(sample) << (O-B)` — a full reversal, not a plain shift; the B
/// data bits themselves change order.
///
/// The caller must ensure `sample` fits in `output_width_bits` bits; the
/// extractor's mask guarantees that for pipeline input.
#[inline]
pub fn normalize_sample(sample: u16, output_width_bits: u32) -> u16 {
    sample.reverse_bits() >> (16 - output_width_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_values_for_ten_in_sixteen() {
        // raw 1 = 0b0000000001, reversed in 10 bits = 512, shifted by 6.
        assert_eq!(normalize_sample(0x001, 16), 0x8000);
        // All ten bits set stays all set, shifted into the top of the range.
        assert_eq!(normalize_sample(0x3FF, 16), 0xFFC0);
        assert_eq!(normalize_sample(0x000, 16), 0x0000);
    }

    #[test]
    fn full_width_reversal_is_an_involution() {
        for x in [0u16, 1, 0x0042, 0x1234, 0x8001, 0xFFFF] {
            assert_eq!(normalize_sample(normalize_sample(x, 16), 16), x);
        }
    }

    #[test]
    fn narrow_width_reversal_is_an_involution() {
        for x in 0..1024u16 {
            assert_eq!(normalize_sample(normalize_sample(x, 10), 10), x);
        }
    }

    #[test]
    fn reverses_data_bits_rather_than_shifting() {
        // 20 = 0b0000010100 -> reversed 0b0010100000 = 160, then * 64.
        assert_eq!(normalize_sample(20, 16), 160 * 64);
        assert_ne!(normalize_sample(20, 16), 20 << 6);
    }

    #[test]
    fn output_never_exceeds_the_output_width() {
        for x in 0..256u16 {
            assert!(normalize_sample(x, 8) < 1 << 8);
        }
    }
}
