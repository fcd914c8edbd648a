/// Converts a collection size to the language's integer type.
///
/// Saturates at `i64::MAX`; a collection that large cannot exist in
/// practice, but the conversion stays total either way.
///
/// ## Example
/// ```
/// use brio::util::num::usize_to_i64_saturating;
///
/// assert_eq!(usize_to_i64_saturating(42), 42);
/// ```
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Converts a language integer to a collection index.
///
/// Returns `None` for negative values, which callers treat as out of range.
///
/// ## Example
/// ```
/// use brio::util::num::i64_to_usize;
///
/// assert_eq!(i64_to_usize(3), Some(3));
/// assert_eq!(i64_to_usize(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
