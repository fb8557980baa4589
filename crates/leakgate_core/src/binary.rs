//! Binary content detection heuristics.

/// Number of bytes checked for null bytes when detecting binary content.
/// Matches how git decides; binary formats almost always have nulls in
/// their headers.
const BINARY_CHECK_BYTES: usize = 8000;

/// Returns `true` if the leading bytes contain a null, which strongly
/// indicates binary data.
#[must_use]
pub fn is_binary_bytes(bytes: &[u8]) -> bool {
    let check_len = bytes.len().min(BINARY_CHECK_BYTES);
    bytes[..check_len].contains(&0)
}

/// Returns `true` if the leading bytes of `content` contain a null byte.
#[must_use]
pub fn is_binary_content(content: &str) -> bool {
    is_binary_bytes(content.as_bytes())
}
