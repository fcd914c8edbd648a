/// Integer-width conversion helpers.
///
/// This module provides small functions for converting between `usize` and
/// `i64` where indexing and length calculations cross between Rust's
/// collection sizes and the language's 64-bit integers.
pub mod num;
