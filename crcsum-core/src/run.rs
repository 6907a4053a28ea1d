use crate::config::{Config, Mode};
use crate::enumerate::{base_dir, enumerate};
use crate::error::CrcResult;
use crate::generate::generate;
use crate::manifest::Manifest;
use crate::output::{resolve_output, OverwritePolicy};
use crate::progress::Reporter;
use crate::verify::{verify_manifest_file, VerificationResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Outcome {
    /// `candidates` counts the enumerated paths, before any were skipped.
    Generated { manifest: Manifest, saved_to: Option<PathBuf>, candidates: usize },
    Verified(Vec<VerificationResult>),
}

/// Execute one run as described by `cfg`.
///
/// Errors returned here are the fatal ones; per-file trouble is reported via
/// `reporter` and reflected in the outcome.
pub fn run(
    cfg: &Config,
    reporter: &mut dyn Reporter,
    policy: &mut dyn OverwritePolicy,
) -> CrcResult<Outcome> {
    match cfg.mode {
        Mode::Verify => {
            if cfg.output.is_some() {
                tracing::warn!("--output is ignored when reading a manifest");
            }
            let results = verify_manifest_file(&cfg.path, cfg.root.as_deref(), reporter)?;
            Ok(Outcome::Verified(results))
        }
        Mode::Generate => {
            let base = base_dir(&cfg.path);
            let dest = cfg.output.as_ref().map(|out| resolve_output(&base, out));
            let mut paths = enumerate(&cfg.path, cfg.recursive)?;
            if let Some(dest) = &dest {
                paths.retain(|p| !same_file(p, dest));
            }
            let manifest = generate(&paths, &base, reporter);
            if let Some(dest) = &dest {
                manifest.save(dest, cfg.pretty, policy)?;
            }
            Ok(Outcome::Generated { manifest, saved_to: dest, candidates: paths.len() })
        }
    }
}

// The manifest being written must not list itself.
fn same_file(candidate: &Path, dest: &Path) -> bool {
    if candidate == dest {
        return true;
    }
    match (fs::canonicalize(candidate), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
