//! Strict base85 codec over an 85-symbol ASCII alphabet.
//!
//! Four bytes of binary data map to five text symbols and back. Decoding is
//! strict: no padding, no whitespace tolerance, no partial chunks. Anything
//! that is not a well-formed stream is rejected atomically with a
//! [`DecodeError`]. Both directions are pure functions with no shared state
//! and are safe to call concurrently.
//!
//! ```
//! use b85_core::{decode, encode};
//!
//! let bytes = [0x12, 0x34, 0x56, 0x78];
//! let text = encode(&bytes).unwrap();
//! assert_eq!(decode(text.as_bytes()).unwrap(), bytes);
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;

// Convenience re-exports
pub use decode::decode;
pub use encode::encode;
pub use error::{DecodeError, EncodeError};
