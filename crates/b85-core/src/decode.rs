//! Strict base85 decoding.
//!
//! # Format
//!
//! The encoded stream is a sequence of 5-symbol chunks. Each chunk is a
//! base-85 number, most-significant digit first, whose value must fit in an
//! unsigned 32-bit accumulator; the chunk decodes to the accumulator's four
//! bytes in little-endian order. The stream carries no padding and no
//! terminator, so a non-empty stream whose length is not a multiple of 5 is
//! malformed.
//!
//! Rejection is atomic: the first offending byte or chunk fails the whole
//! call and no partial output is observable.
//!
//! # Example
//!
//! ```
//! use b85_core::decode;
//!
//! assert_eq!(decode(b"00000").unwrap(), [0x00, 0x00, 0x00, 0x00]);
//! assert_eq!(decode(b"|NsC0").unwrap(), [0xFF, 0xFF, 0xFF, 0xFF]);
//! assert!(decode(b"1234/").is_err());
//! ```

use crate::alphabet::DIGITS;
use crate::error::DecodeError;

/// Decode a base85 stream into its raw bytes.
///
/// Returns 4 bytes per 5-symbol chunk, chunks in input order. Empty input
/// yields empty output.
///
/// # Errors
///
/// Rejects input whose length is not a multiple of 5, any byte outside the
/// alphabet, and any chunk whose value exceeds `u32::MAX`.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 5 != 0 {
        return Err(DecodeError::UnalignedLength {
            length: input.len(),
        });
    }

    let mut output = Vec::with_capacity(input.len() / 5 * 4);
    for (chunk_index, chunk) in input.chunks_exact(5).enumerate() {
        let offset = chunk_index * 5;
        // u64 accumulator: five digits of 84 peak near 4.44e9, past u32 but
        // nowhere near u64, so one comparison at the end catches overflow.
        let mut acc: u64 = 0;
        for (i, &byte) in chunk.iter().enumerate() {
            match DIGITS[byte as usize] {
                -1 => {
                    return Err(DecodeError::InvalidSymbol {
                        byte,
                        offset: offset + i,
                    })
                }
                digit => acc = acc * 85 + digit as u64,
            }
        }
        if acc > u64::from(u32::MAX) {
            return Err(DecodeError::ChunkOverflow { offset });
        }
        output.extend_from_slice(&(acc as u32).to_le_bytes());
    }

    Ok(output)
}
