//! Positioned-read access to the served file

use crate::error::{IndexError, Result};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Largest file we attempt to memory-map. Larger files use positioned reads.
const MMAP_MAX_SIZE: u64 = 2_147_483_648;

/// Read-only handle onto the served file.
///
/// Every read names an explicit byte range and no call mutates a shared
/// cursor, so a single handle serves concurrent callers without locking.
#[derive(Debug)]
pub struct LineReader {
    /// Open descriptor, used for positioned reads when not memory-mapped
    file: File,
    /// Memory-mapped file (if available)
    mmap: Option<Mmap>,
    /// Size of the file at open time
    size: u64,
}

impl LineReader {
    /// Open a file for positioned reading.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Io` if the file cannot be opened or stat'd.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        let mmap = if size > 0 && size < MMAP_MAX_SIZE {
            match unsafe { MmapOptions::new().map(&file) } {
                Ok(mmap) => {
                    debug!("Memory-mapped {:?} ({} bytes)", path, size);
                    Some(mmap)
                }
                Err(e) => {
                    debug!("Failed to memory-map {:?}, using positioned reads: {}", path, e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self { file, mmap, size })
    }

    /// Read `length` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::OutOfBounds` if the range extends past the end
    /// of the file, or `IndexError::Io` if the read fails.
    pub fn read_at(&self, offset: u64, length: usize) -> Result<Vec<u8>> {
        if offset + length as u64 > self.size {
            return Err(IndexError::OutOfBounds {
                offset,
                length: length as u64,
                size: self.size,
            });
        }

        if let Some(ref mmap) = self.mmap {
            // Fast path: memory-mapped access
            return Ok(mmap[offset as usize..offset as usize + length].to_vec());
        }

        let mut buf = vec![0u8; length];
        read_exact_at(&self.file, &mut buf, offset)?;
        Ok(buf)
    }

    /// Size of the file at open time.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Check if memory mapping is in use.
    #[must_use]
    pub const fn is_memory_mapped(&self) -> bool {
        self.mmap.is_some()
    }
}

#[cfg(unix)]
fn read_exact_at(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<()> {
    use std::os::unix::fs::FileExt;
    file.read_exact_at(buf, offset)
}

#[cfg(windows)]
fn read_exact_at(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<()> {
    use std::os::windows::fs::FileExt;
    let mut read = 0;
    while read < buf.len() {
        let n = file.seek_read(&mut buf[read..], offset + read as u64)?;
        if n == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "failed to fill whole buffer",
            ));
        }
        read += n;
    }
    Ok(())
}
