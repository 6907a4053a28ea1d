use crate::error::{CrcError, CrcResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// List candidate files under `root`, in a stable order.
///
/// A file yields itself. A directory yields its non-directory children, and
/// with `recursive` everything below it, depth-first with siblings sorted by
/// name. Paths are `root` joined with the entry names; nothing is canonicalized.
/// Symlinks are listed but never descended into.
pub fn enumerate(root: &Path, recursive: bool) -> CrcResult<Vec<PathBuf>> {
    let md = match fs::metadata(root) {
        Ok(md) => md,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CrcError::PathNotFound(root.to_path_buf()))
        }
        Err(source) => return Err(CrcError::FileUnreadable { path: root.to_path_buf(), source }),
    };
    if md.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !md.is_dir() {
        return Err(CrcError::PathNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }
    let mut files = Vec::new();
    for ent in walker {
        let ent = match ent {
            Ok(ent) => ent,
            Err(e) if e.depth() == 0 => {
                return Err(CrcError::FileUnreadable {
                    path: root.to_path_buf(),
                    source: io::Error::from(e),
                })
            }
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if points_to_dir(&ent) {
            continue;
        }
        files.push(ent.into_path());
    }
    tracing::debug!(root = %root.display(), recursive, count = files.len(), "enumerated");
    Ok(files)
}

fn points_to_dir(ent: &DirEntry) -> bool {
    let ft = ent.file_type();
    if ft.is_dir() {
        return true;
    }
    ft.is_symlink() && fs::metadata(ent.path()).map(|m| m.is_dir()).unwrap_or(false)
}

/// Directory that manifest filenames are made relative to: the target itself
/// when it is a directory, otherwise the directory containing it.
pub fn base_dir(target: &Path) -> PathBuf {
    if target.is_dir() {
        return target.to_path_buf();
    }
    match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
