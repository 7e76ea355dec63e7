//! Line store combining the index with positioned reads

use crate::error::Result;
use crate::index::LineIndex;
use crate::reader::LineReader;
use bytes::Bytes;
use std::path::Path;
use tracing::{debug, warn};

/// Indexed, read-only access to the lines of one text file.
///
/// Opening a store scans the file once to build its [`LineIndex`]; every
/// fetch afterwards is an O(1) range lookup followed by one positioned
/// read. The store never mutates after open, so it can be shared across
/// concurrent callers by reference.
#[derive(Debug)]
pub struct LineStore {
    index: LineIndex,
    reader: LineReader,
}

impl LineStore {
    /// Index `path` and open a read handle onto it.
    ///
    /// The file must not change once the scan begins.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Io` if the file cannot be opened or read.
    pub fn open(path: &Path) -> Result<Self> {
        let index = LineIndex::from_file(path)?;
        let reader = LineReader::open(path)?;

        if reader.size() != index.file_size() {
            warn!(
                "{:?} changed size during indexing: indexed {} bytes, file is now {}",
                path,
                index.file_size(),
                reader.size()
            );
        }

        debug!(
            "Opened line store for {:?}: {} lines, {} bytes",
            path,
            index.line_count(),
            index.file_size()
        );

        Ok(Self { index, reader })
    }

    /// Fetch the content of line `line`, without its terminator.
    ///
    /// A `\r` immediately preceding the stripped `\n` is removed as well,
    /// so CRLF files serve clean content.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::OutOfRange` if `line` is at or beyond the line
    /// count, or `IndexError::Io` if the positioned read fails.
    pub fn line(&self, line: u64) -> Result<Bytes> {
        let (start, end) = self.index.byte_range(line)?;

        let mut data = self.reader.read_at(start, (end - start) as usize)?;

        if data.last() == Some(&b'\n') {
            data.pop();
            if data.last() == Some(&b'\r') {
                data.pop();
            }
        }

        Ok(Bytes::from(data))
    }

    /// Total number of lines in the file.
    #[must_use]
    pub fn line_count(&self) -> u64 {
        self.index.line_count()
    }

    /// Total size of the file in bytes.
    #[must_use]
    pub const fn file_size(&self) -> u64 {
        self.index.file_size()
    }

    /// The underlying line index.
    #[must_use]
    pub const fn index(&self) -> &LineIndex {
        &self.index
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_store(content: &[u8]) -> (LineStore, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        let store = LineStore::open(file.path()).unwrap();
        (store, file)
    }

    #[test]
    fn test_fetch_lines() {
        let (store, _file) = create_store(b"first\nsecond\nthird\n");

        assert_eq!(store.line_count(), 3);
        assert_eq!(store.line(0).unwrap(), "first");
        assert_eq!(store.line(1).unwrap(), "second");
        assert_eq!(store.line(2).unwrap(), "third");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let (store, _file) = create_store(b"first\nlast");

        assert_eq!(store.line_count(), 2);
        assert_eq!(store.line(1).unwrap(), "last");
    }

    #[test]
    fn test_empty_lines_served_as_empty_content() {
        let (store, _file) = create_store(b"a\n\n\nb\n");

        assert_eq!(store.line_count(), 4);
        assert_eq!(store.line(1).unwrap(), "");
        assert_eq!(store.line(2).unwrap(), "");
        assert_eq!(store.line(3).unwrap(), "b");
    }

    #[test]
    fn test_crlf_stripped() {
        let (store, _file) = create_store(b"one\r\ntwo\r\n");

        assert_eq!(store.line(0).unwrap(), "one");
        assert_eq!(store.line(1).unwrap(), "two");
    }

    #[test]
    fn test_out_of_range_propagated() {
        let (store, _file) = create_store(b"only\n");

        let err = store.line(1).unwrap_err();
        assert!(matches!(err, IndexError::OutOfRange { line: 1, total: 1 }));
    }

    #[test]
    fn test_fetch_is_idempotent() {
        let (store, _file) = create_store(b"alpha\nbeta\n");

        let first = store.line(1).unwrap();
        let second = store.line(1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_file() {
        let (store, _file) = create_store(b"");

        assert_eq!(store.line_count(), 0);
        assert!(store.line(0).is_err());
    }
}
