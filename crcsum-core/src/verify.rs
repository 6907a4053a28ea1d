use crate::error::CrcResult;
use crate::hash::hash_file;
use crate::manifest::Manifest;
use crate::progress::{Event, Reporter};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub filename: String,
    pub expected_crc: u32,
    /// `None` when the file could not be read.
    pub actual_crc: Option<u32>,
    pub matched: bool,
}

impl VerificationResult {
    pub fn status(&self) -> &'static str {
        if self.matched {
            "OK"
        } else {
            "XX"
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual_crc {
            Some(actual) => write!(
                f,
                "{} : {} == {} : {}",
                self.status(),
                self.expected_crc,
                actual,
                self.filename
            ),
            None => write!(f, "{} : {} == ERR : {}", self.status(), self.expected_crc, self.filename),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifySummary {
    pub ok: usize,
    pub mismatched: usize,
    pub unreadable: usize,
}

impl VerifySummary {
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let mut s = Self::default();
        for r in results {
            match (r.matched, r.actual_crc) {
                (true, _) => s.ok += 1,
                (false, Some(_)) => s.mismatched += 1,
                (false, None) => s.unreadable += 1,
            }
        }
        s
    }

    pub fn failed(&self) -> usize {
        self.mismatched + self.unreadable
    }

    pub fn all_ok(&self) -> bool {
        self.failed() == 0
    }
}

/// Re-hash every entry of `manifest` and compare. Relative filenames are
/// resolved against `root`. Per-file failures never stop the run.
pub fn verify(
    manifest: &Manifest,
    root: &Path,
    reporter: &mut dyn Reporter,
) -> Vec<VerificationResult> {
    let mut results = Vec::with_capacity(manifest.files.len());
    for entry in &manifest.files {
        let path = resolve(root, &entry.filename);
        let actual_crc = match hash_file(&path) {
            Ok(crc) => Some(crc),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        };
        let res = VerificationResult {
            filename: entry.filename.clone(),
            expected_crc: entry.crc,
            actual_crc,
            matched: actual_crc == Some(entry.crc),
        };
        reporter.report(Event::Checked(res.clone()));
        results.push(res);
    }
    results
}

/// Load the manifest at `manifest_path` and verify it. Without an explicit
/// `root`, entries resolve against the manifest's own directory.
pub fn verify_manifest_file(
    manifest_path: &Path,
    root: Option<&Path>,
    reporter: &mut dyn Reporter,
) -> CrcResult<Vec<VerificationResult>> {
    let manifest = Manifest::load(manifest_path)?;
    let root = match root {
        Some(r) => r.to_path_buf(),
        None => manifest_dir(manifest_path),
    };
    Ok(verify(&manifest, &root, reporter))
}

pub fn manifest_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve(root: &Path, filename: &str) -> PathBuf {
    let p = Path::new(filename);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
