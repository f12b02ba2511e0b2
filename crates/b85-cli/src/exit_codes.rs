//! Unified exit codes for the b85 CLI.
//! These codes are part of the public contract; scripts match on them.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 1; // I/O failure or unexpected error
pub const DATA_ERROR: i32 = 2; // input rejected by the codec
