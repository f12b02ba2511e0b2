//! Error types for the base85 codec.

use thiserror::Error;

/// Error returned when decoding rejects its input.
///
/// All variants mean the same thing to callers: the input is not a valid
/// base85 stream. The variants carry enough context to point at the
/// offending byte or chunk in diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Non-empty input whose length is not a multiple of 5.
    #[error("input length {length} is not a multiple of 5")]
    UnalignedLength { length: usize },

    /// A byte outside the 85-symbol alphabet.
    #[error("byte {byte:#04x} at offset {offset} is not a base85 symbol")]
    InvalidSymbol { byte: u8, offset: usize },

    /// A 5-symbol chunk whose value exceeds 32 bits.
    #[error("chunk at offset {offset} overflows the 32-bit accumulator")]
    ChunkOverflow { offset: usize },
}

/// Error returned when encoding rejects its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Input whose length is not a multiple of 4. There is no padding scheme.
    #[error("input length {length} is not a multiple of 4")]
    UnalignedLength { length: usize },
}
