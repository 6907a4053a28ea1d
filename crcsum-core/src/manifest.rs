use crate::error::{CrcError, CrcResult};
use crate::output::OverwritePolicy;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Version recorded in generated manifests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Identifies the CRC32 implementation behind the recorded values.
pub const CHECKSUM_LIBRARY_VERSION: &str = "crc32fast-1.3";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    pub filename: String,
    pub crc: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "zlib_version", alias = "checksum_library_version")]
    pub checksum_library_version: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifest {
    /// Empty manifest stamped with this build's identifiers.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            version: VERSION.to_string(),
            checksum_library_version: CHECKSUM_LIBRARY_VERSION.to_string(),
        }
    }

    pub fn push(&mut self, filename: impl Into<String>, crc: u32) {
        self.files.push(ManifestEntry { filename: filename.into(), crc });
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn load(path: &Path) -> CrcResult<Self> {
        let f = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CrcError::PathNotFound(path.to_path_buf()),
            _ => CrcError::FileUnreadable { path: path.to_path_buf(), source },
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            if e.is_io() {
                CrcError::FileUnreadable { path: path.to_path_buf(), source: e.into() }
            } else {
                CrcError::ManifestParse { path: path.to_path_buf(), reason: e.to_string() }
            }
        })
    }

    /// JSON form: compact, or indented by four spaces when `pretty`.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<Vec<u8>> {
        if !pretty {
            return serde_json::to_vec(self);
        }
        let mut out = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
        self.serialize(&mut ser)?;
        Ok(out)
    }

    /// Write to `dest`. An existing file is only replaced if `policy` agrees;
    /// otherwise nothing is written and `OutputCollision` is returned.
    pub fn save(
        &self,
        dest: &Path,
        pretty: bool,
        policy: &mut dyn OverwritePolicy,
    ) -> CrcResult<()> {
        let io_err = |source| CrcError::Io { path: dest.to_path_buf(), source };
        if dest.exists() && !policy.confirm_overwrite(dest) {
            return Err(CrcError::OutputCollision(dest.to_path_buf()));
        }
        let bytes = self.to_json(pretty).map_err(|e| io_err(e.into()))?;
        fs::write(dest, bytes).map_err(io_err)?;
        tracing::info!(path = %dest.display(), entries = self.files.len(), "manifest written");
        Ok(())
    }
}
