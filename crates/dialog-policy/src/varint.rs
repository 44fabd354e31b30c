//! Unsigned variable-length integers of the persisted policy form.
//!
//! The leading byte opens with one `1` bit per trailing byte, then a `0`
//! separator; its remaining low bits carry the most significant bits of the
//! value. Trailing bytes hold the rest of the value little-endian. Request
//! identifiers below 128 and every family flag word fit in the leading byte
//! alone; a full `u32` needs five bytes.
//!
//! | Leading byte | Trailing bytes | Largest value |
//! |--------------|----------------|---------------|
//! | `0xxx_xxxx`  | 0 | 2^7 - 1 |
//! | `10xx_xxxx`  | 1 | 2^14 - 1 |
//! | `110x_xxxx`  | 2 | 2^21 - 1 |
//! | `1110_xxxx`  | 3 | 2^28 - 1 |
//! | `1111_0000`  | 4 | `u32::MAX` |

use std::io::{self, Read};

const MAX_TRAILING: usize = 4;

/// Marker bits announcing `trailing` bytes after the leading byte.
const fn marker(trailing: usize) -> u8 {
    !(0xFF >> trailing)
}

/// Appends `value` to `out`, using the shortest form that holds it.
pub(crate) fn encode_varint_u32_to_vec(value: u32, out: &mut Vec<u8>) {
    let le = value.to_le_bytes();
    let significant = (MAX_TRAILING - value.leading_zeros() as usize / 8).max(1);

    // The top significant byte rides in the leading byte when it fits below
    // the marker and separator; otherwise it becomes one more trailing byte.
    let shorter = significant - 1;
    let (trailing, leading) = if le[shorter] < 0x80 >> shorter {
        (shorter, marker(shorter) | le[shorter])
    } else {
        (significant, marker(significant))
    };

    out.push(leading);
    out.extend_from_slice(&le[..trailing]);
}

/// Reads one value written by [`encode_varint_u32_to_vec`].
///
/// # Errors
///
/// [`io::ErrorKind::UnexpectedEof`] when `reader` ends inside the value and
/// [`io::ErrorKind::InvalidData`] when the leading byte announces more than
/// four trailing bytes.
pub(crate) fn read_varint_u32<R: Read + ?Sized>(reader: &mut R) -> io::Result<u32> {
    let mut leading = [0u8; 1];
    reader.read_exact(&mut leading)?;
    let leading = leading[0];

    let trailing = leading.leading_ones() as usize;
    if trailing > MAX_TRAILING {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "integer announces more than four trailing bytes",
        ));
    }

    let mut le = [0u8; MAX_TRAILING];
    reader.read_exact(&mut le[..trailing])?;
    if trailing < MAX_TRAILING {
        le[trailing] = leading & (0xFF >> trailing);
    }
    Ok(u32::from_le_bytes(le))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(value: u32) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint_u32_to_vec(value, &mut out);
        out
    }

    #[test]
    fn shortest_form_for_each_width() {
        let cases: [(u32, &[u8]); 9] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x80]),
            (300, &[0x81, 0x2C]),
            (16_383, &[0xBF, 0xFF]),
            (16_384, &[0xC0, 0x00, 0x40]),
            (0x0FFF_FFFF, &[0xEF, 0xFF, 0xFF, 0xFF]),
            (u32::MAX, &[0xF0, 0xFF, 0xFF, 0xFF, 0xFF]),
        ];

        for (value, expected) in cases {
            assert_eq!(encoded(value), expected, "value {value}");
        }
    }

    #[test]
    fn values_are_read_back_in_sequence() {
        let mut bytes = encoded(300);
        bytes.extend(encoded(5));

        let mut rest = bytes.as_slice();
        assert_eq!(read_varint_u32(&mut rest).unwrap(), 300);
        assert_eq!(read_varint_u32(&mut rest).unwrap(), 5);
        assert!(rest.is_empty());
    }

    #[test]
    fn short_input_is_unexpected_eof() {
        let cases: [&[u8]; 3] = [&[], &[0x80], &[0xF0, 0xFF]];
        for bytes in cases {
            let err = read_varint_u32(&mut &bytes[..]).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof, "{bytes:02x?}");
        }
    }

    #[test]
    fn five_or_more_marker_bits_are_invalid() {
        for leading in [0xF8u8, 0xFC, 0xFF] {
            let bytes = [leading, 0, 0, 0, 0, 0, 0, 0];
            let err = read_varint_u32(&mut &bytes[..]).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        }
    }

    proptest! {
        #[test]
        fn every_u32_round_trips(value in any::<u32>()) {
            let bytes = encoded(value);
            prop_assert!(bytes.len() <= 1 + MAX_TRAILING);
            prop_assert_eq!(read_varint_u32(&mut bytes.as_slice()).unwrap(), value);
        }
    }
}
