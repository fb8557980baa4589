/// Returns the byte offset of the start of the line containing `offset`.
#[must_use]
pub fn line_start(content: &str, offset: usize) -> usize {
    content[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Returns the byte offset of the next newline after `offset`, or the
/// end of `content` if there is no trailing newline.
#[must_use]
pub fn line_end(content: &str, offset: usize) -> usize {
    content[offset..].find('\n').map_or(content.len(), |i| offset + i)
}

/// Returns the one-based line number containing `offset`.
#[must_use]
pub fn line_number(content: &str, offset: usize) -> u32 {
    let newlines = content[..offset].bytes().filter(|&b| b == b'\n').count();
    u32::try_from(newlines).unwrap_or(u32::MAX).saturating_add(1)
}
