//! In-memory line index built by a single sequential scan

use crate::error::{IndexError, Result};
use memchr::memchr_iter;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Chunk size for the build scan. Bounds memory use regardless of file size.
const SCAN_CHUNK_SIZE: usize = 64 * 1024;

/// Maps line numbers to the byte offset of each line start.
///
/// Built once by scanning the file sequentially, then immutable. A lookup is
/// a positional read of the offset table; no scanning happens at query time.
///
/// Invariants: offsets are strictly increasing, `offsets[0]` is 0 for a
/// non-empty file, line `i` spans `[offsets[i], offsets[i + 1])` and the
/// final line spans `[offsets[last], file_size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Starting byte offset of each line
    offsets: Vec<u64>,
    /// Total size in bytes of the scanned input
    file_size: u64,
}

impl LineIndex {
    /// Build the index by scanning `path` once.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Io` if the file cannot be opened or read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let index = Self::from_reader(file)?;

        debug!(
            "Indexed {:?}: {} lines, {} bytes",
            path,
            index.line_count(),
            index.file_size()
        );

        Ok(index)
    }

    /// Build the index from any byte stream, reading it in fixed-size
    /// chunks.
    ///
    /// Every `\n` terminates a line; the byte after it starts the next one.
    /// A final line without a trailing terminator is still indexed, bounded
    /// by the end of the stream. An empty stream yields zero lines, and
    /// consecutive terminators yield zero-length lines.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Io` if reading fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut offsets = vec![0u64];
        let mut total: u64 = 0;
        let mut buf = vec![0u8; SCAN_CHUNK_SIZE];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            for pos in memchr_iter(b'\n', &buf[..n]) {
                offsets.push(total + pos as u64 + 1);
            }

            total += n as u64;
        }

        if total == 0 {
            offsets.clear();
        } else if offsets.last() == Some(&total) {
            // Trailing terminator: no line starts at end of file.
            offsets.pop();
        }
        offsets.shrink_to_fit();

        Ok(Self {
            offsets,
            file_size: total,
        })
    }

    /// Total number of lines in the indexed file.
    #[must_use]
    pub fn line_count(&self) -> u64 {
        self.offsets.len() as u64
    }

    /// Returns `true` if the indexed file has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Total size in bytes of the indexed file.
    #[must_use]
    pub const fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Byte range `[start, end)` covering line `line`, including its
    /// terminator if present.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::OutOfRange` if `line >= line_count()`.
    pub fn byte_range(&self, line: u64) -> Result<(u64, u64)> {
        let idx = usize::try_from(line).unwrap_or(usize::MAX);

        let Some(&start) = self.offsets.get(idx) else {
            return Err(IndexError::OutOfRange {
                line,
                total: self.line_count(),
            });
        };

        let end = self.offsets.get(idx + 1).copied().unwrap_or(self.file_size);

        Ok((start, end))
    }
}
