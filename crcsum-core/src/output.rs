use std::path::Path;

/// Decides whether an existing manifest destination may be replaced.
pub trait OverwritePolicy {
    fn confirm_overwrite(&mut self, path: &Path) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysOverwrite;

#[derive(Clone, Copy, Debug, Default)]
pub struct NeverOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> bool {
        true
    }
}

impl OverwritePolicy for NeverOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> bool {
        false
    }
}

impl<F: FnMut(&Path) -> bool> OverwritePolicy for F {
    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Resolve a manifest destination. Relative paths land in `base`.
pub fn resolve_output(base: &Path, output: &Path) -> std::path::PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        base.join(output)
    }
}
