use crate::error::{CrcError, CrcResult};
use crate::hash::hash_file;
use crate::manifest::Manifest;
use crate::progress::{Event, Progress, Reporter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Hash `paths` in order and collect a fresh manifest.
///
/// Paths that are not regular files (directories, dangling links, devices) are
/// skipped without an entry. A file that cannot be read, or whose name cannot
/// be stored as UTF-8, is reported and left out; the rest of the batch still
/// runs. Filenames are recorded relative to `base` when possible, as given
/// otherwise.
pub fn generate(paths: &[PathBuf], base: &Path, reporter: &mut dyn Reporter) -> Manifest {
    let mut manifest = Manifest::new();
    let mut progress = Progress::new(paths.len());
    for path in paths {
        match ensure_regular_file(path) {
            Ok(()) => match hash_entry(path, base) {
                Ok((name, crc)) => {
                    manifest.push(name, crc);
                    reporter.report(Event::Hashed { path: path.clone(), crc });
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    reporter.report(Event::Unreadable { path: path.clone(), error: e.to_string() });
                }
            },
            Err(e) => {
                tracing::debug!("skipped: {}", e);
                reporter.report(Event::Skipped { path: path.clone() });
            }
        }
        reporter.report(progress.tick());
    }
    manifest
}

/// `NotARegularFile` for paths that are definitely not regular files:
/// directories, special files, dangling links. Anything else, including
/// paths whose metadata cannot be read, passes so permission problems
/// surface from the hasher as `FileUnreadable`.
pub fn ensure_regular_file(path: &Path) -> CrcResult<()> {
    let regular = match fs::metadata(path) {
        Ok(md) => md.is_file(),
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    };
    if regular {
        Ok(())
    } else {
        Err(CrcError::NotARegularFile(path.to_path_buf()))
    }
}

fn hash_entry(path: &Path, base: &Path) -> CrcResult<(String, u32)> {
    let name = entry_name(path, base)?;
    let crc = hash_file(path)?;
    Ok((name, crc))
}

// Manifest filenames are JSON strings; a lossy conversion would record a
// name that verify can never open again.
fn entry_name(path: &Path, base: &Path) -> CrcResult<String> {
    let rel = pathdiff::diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty() && !p.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf());
    match rel.into_os_string().into_string() {
        Ok(name) => Ok(name),
        Err(_) => Err(CrcError::FileUnreadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
        }),
    }
}
