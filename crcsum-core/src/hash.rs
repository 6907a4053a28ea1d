use crate::error::{CrcError, CrcResult};
use crc32fast::Hasher as Crc32;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Read size used by `hash_file`.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Continue a CRC32 (IEEE, reflected 0xEDB88320) over `chunk`, starting from
/// the finalized value of everything before it. `update(0, ..)` starts fresh.
pub fn update(crc: u32, chunk: &[u8]) -> u32 {
    let mut h = Crc32::new_with_initial(crc);
    h.update(chunk);
    h.finalize()
}

/// One-shot CRC32 of an in-memory buffer.
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Stream `reader` to EOF in `chunk_size` reads.
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<u32> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut crc = 0u32;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        crc = update(crc, &buf[..n]);
    }
    Ok(crc)
}

pub fn hash_file(path: &Path) -> CrcResult<u32> {
    hash_file_with(path, CHUNK_SIZE)
}

/// CRC32 of a regular file. Missing paths, non-regular files and read errors
/// all come back as `FileUnreadable`. The handle is dropped before returning.
pub fn hash_file_with(path: &Path, chunk_size: usize) -> CrcResult<u32> {
    let unreadable = |source| CrcError::FileUnreadable { path: path.to_path_buf(), source };
    let md = fs::metadata(path).map_err(unreadable)?;
    if !md.is_file() {
        return Err(unreadable(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file")));
    }
    let f = File::open(path).map_err(unreadable)?;
    hash_reader(f, chunk_size).map_err(unreadable)
}
