//! Little-endian 7-bit variable-length integer codec.
//!
//! MIDI Capability Inquiry encodes multi-byte integer fields as consecutive
//! 7-bit groups, least-significant group first (byte 0 = bits 0-6, byte 1 =
//! bits 7-13, and so on). The 2- and 4-byte widths appear in CI headers.

/// Decode an `N`-byte little-endian 7-bit field into an unsigned integer.
///
/// The top bit of each byte is ignored, not validated; callers guarantee the
/// 7-bit payload convention. Total over its domain, `N <= 4` so the result
/// fits 28 bits.
#[inline]
pub fn decode_le7<const N: usize>(bytes: [u8; N]) -> u32 {
    let mut value = 0u32;
    for (i, byte) in bytes.iter().enumerate() {
        value |= ((byte & 0x7F) as u32) << (7 * i);
    }
    value
}

/// Encode an unsigned integer into an `N`-byte little-endian 7-bit field.
///
/// Bits above `7 * N` are discarded; within the 7N-bit range this is the
/// exact inverse of [`decode_le7`].
#[inline]
pub fn encode_le7<const N: usize>(value: u32) -> [u8; N] {
    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = ((value >> (7 * i)) & 0x7F) as u8;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode_le7([0x00, 0x00]), 0);
        assert_eq!(decode_le7([0x7F, 0x00]), 0x7F);
        assert_eq!(decode_le7([0x00, 0x01]), 0x80);
        assert_eq!(decode_le7([0x7F, 0x7F]), 0x3FFF);
        assert_eq!(decode_le7([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
    }

    #[test]
    fn test_byte_zero_is_least_significant() {
        assert_eq!(decode_le7([0x01, 0x00, 0x00, 0x00]), 1);
        assert_eq!(decode_le7([0x00, 0x00, 0x00, 0x01]), 1 << 21);
    }

    #[test]
    fn test_top_bit_ignored() {
        assert_eq!(decode_le7([0xFF, 0x80]), 0x7F);
    }

    #[test]
    fn test_decode_bounded_by_width() {
        // 2-byte fields never exceed 14 bits, 4-byte never exceed 28.
        assert!(decode_le7([0xFF, 0xFF]) < (1 << 14));
        assert!(decode_le7([0xFF, 0xFF, 0xFF, 0xFF]) < (1 << 28));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for value in [0u32, 1, 0x7F, 0x80, 0x3FFF, 0x4000, 0x0FFF_FFFF] {
            assert_eq!(decode_le7(encode_le7::<4>(value)), value);
        }
        for value in [0u32, 1, 0x7F, 0x80, 0x1234, 0x3FFF] {
            assert_eq!(decode_le7(encode_le7::<2>(value)), value);
        }
    }

    #[test]
    fn test_encode_vectors() {
        assert_eq!(encode_le7::<2>(0x3FFF), [0x7F, 0x7F]);
        assert_eq!(encode_le7::<2>(0x80), [0x00, 0x01]);
        assert_eq!(encode_le7::<4>(0x0FFF_FFFF), [0x7F, 0x7F, 0x7F, 0x7F]);
    }
}
