//! Working-tree file reading with size limits and binary detection.

use std::io::Read;
use std::path::Path;

use leakgate_core::FileData;
use leakgate_core::binary::is_binary_bytes;

/// Files at or above this size are memory-mapped instead of heap-read.
const MMAP_THRESHOLD: u64 = 32 * 1024;

/// Reads a working-tree file, classifying the outcome instead of failing.
///
/// Small files (< 32 KB) are read with a single `read` syscall.
/// Large files are memory-mapped so the OS page cache is used directly,
/// avoiding a heap copy until the content is confirmed to be text.
#[must_use]
pub fn read_file(path: &Path, max_size: Option<u64>) -> FileData {
    let Ok(mut file) = std::fs::File::open(path) else {
        return FileData::Unreadable;
    };
    let Ok(metadata) = file.metadata() else {
        return FileData::Unreadable;
    };
    let len = metadata.len();

    if let Some(max) = max_size
        && len > max
    {
        return FileData::TooLarge(len);
    }

    if len >= MMAP_THRESHOLD {
        read_large_file_mmap(&file)
    } else {
        read_small_file(&mut file, len)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "files above max_size are already rejected; remaining sizes fit in usize"
)]
fn read_small_file(file: &mut std::fs::File, len: u64) -> FileData {
    let mut bytes = Vec::with_capacity(len as usize);
    if file.read_to_end(&mut bytes).is_err() {
        return FileData::Unreadable;
    }
    if is_binary_bytes(&bytes) {
        return FileData::Binary;
    }
    match String::from_utf8(bytes) {
        Ok(text) => FileData::Text(text),
        Err(_) => FileData::Binary,
    }
}

fn read_large_file_mmap(file: &std::fs::File) -> FileData {
    // SAFETY: The map is read-only and dropped before this function returns.
    // Concurrent file truncation could cause SIGBUS, but this is the same
    // risk `git` and `ripgrep` accept for mmap-based file reading.
    #[expect(unsafe_code, reason = "mmap requires unsafe; lifetime is scoped to this function")]
    let mmap = match unsafe { memmap2::Mmap::map(file) } {
        Ok(mmap) => mmap,
        Err(_) => return FileData::Unreadable,
    };

    if is_binary_bytes(&mmap) {
        return FileData::Binary;
    }

    match std::str::from_utf8(&mmap) {
        Ok(text) => FileData::Text(text.to_string()),
        Err(_) => FileData::Binary,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn read_file_returns_text_content() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello world").unwrap();

        match read_file(file.path(), None) {
            FileData::Text(content) => assert!(content.contains("hello world")),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn read_file_nonexistent_is_unreadable() {
        let data = read_file(Path::new("/nonexistent/file.txt"), None);
        assert!(matches!(data, FileData::Unreadable));
    }

    #[test]
    fn read_file_over_limit_reports_size() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", "x".repeat(1000)).unwrap();

        match read_file(file.path(), Some(500)) {
            FileData::TooLarge(size) => assert_eq!(size, 1000),
            other => panic!("expected too-large, got {other:?}"),
        }
    }

    #[test]
    fn read_file_exactly_at_limit_is_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", "x".repeat(100)).unwrap();

        assert!(matches!(read_file(file.path(), Some(100)), FileData::Text(_)));
    }

    #[test]
    fn read_file_detects_binary_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"text\x00binary").unwrap();

        assert!(matches!(read_file(file.path(), None), FileData::Binary));
    }

    #[test]
    fn read_file_handles_large_text() {
        let mut file = NamedTempFile::new().unwrap();
        let line = "a line of perfectly ordinary text\n";
        for _ in 0..2000 {
            file.write_all(line.as_bytes()).unwrap();
        }

        match read_file(file.path(), None) {
            FileData::Text(content) => assert!(content.len() as u64 >= MMAP_THRESHOLD),
            other => panic!("expected text, got {other:?}"),
        }
    }

}
