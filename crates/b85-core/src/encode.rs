//! Base85 encoding, the exact inverse of [`decode`](crate::decode::decode).

use crate::alphabet::SYMBOLS;
use crate::error::EncodeError;

/// Encode 4-byte-aligned binary data as base85 text.
///
/// Each 4-byte group is read as a little-endian `u32` and written as 5
/// symbols, most-significant digit first. Input whose length is not a
/// multiple of 4 is rejected; there is no padding scheme.
///
/// ```
/// use b85_core::{decode, encode};
///
/// let text = encode(&[0xFF; 4]).unwrap();
/// assert_eq!(text, "|NsC0");
/// assert_eq!(decode(text.as_bytes()).unwrap(), [0xFF; 4]);
/// ```
pub fn encode(input: &[u8]) -> Result<String, EncodeError> {
    if input.len() % 4 != 0 {
        return Err(EncodeError::UnalignedLength {
            length: input.len(),
        });
    }

    let mut output = String::with_capacity(input.len() / 4 * 5);
    for group in input.chunks_exact(4) {
        let mut acc = u32::from_le_bytes([group[0], group[1], group[2], group[3]]);
        let mut symbols = [0u8; 5];
        for slot in symbols.iter_mut().rev() {
            *slot = SYMBOLS[(acc % 85) as usize];
            acc /= 85;
        }
        for symbol in symbols {
            output.push(symbol as char);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn test_known_groups() {
        assert_eq!(encode(&[0x00, 0x00, 0x00, 0x00]).unwrap(), "00000");
        assert_eq!(encode(&[0xFF; 4]).unwrap(), "|NsC0");
        assert_eq!(encode(&[0x01, 0x00, 0x00, 0x00]).unwrap(), "00001");
        assert_eq!(encode(&[0x00, 0x01, 0x00, 0x00]).unwrap(), "00031");
    }

    #[test]
    fn test_groups_preserve_order() {
        assert_eq!(
            encode(&[0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap(),
            "00000|NsC0"
        );
    }

    #[test]
    fn test_rejects_unaligned_length() {
        for length in [1, 2, 3, 5, 7] {
            assert_eq!(
                encode(&vec![0u8; length]),
                Err(EncodeError::UnalignedLength { length })
            );
        }
    }
}
