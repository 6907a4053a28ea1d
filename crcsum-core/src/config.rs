use anyhow::Result;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Hash the target and build a manifest.
    #[default]
    Generate,
    /// Treat the target as a manifest and check the files it lists.
    Verify,
}

/// What to do when the manifest destination already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overwrite {
    #[default]
    Prompt,
    Always,
    Never,
}

/// A parsed run request, whichever front-end produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub mode: Mode,
    pub recursive: bool,
    pub pretty: bool,
    pub overwrite: Overwrite,
    /// Verify only: directory manifest entries resolve against.
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: None,
            mode: Mode::Generate,
            recursive: false,
            pretty: false,
            overwrite: Overwrite::Prompt,
            root: None,
        }
    }
}

/// Anything that can produce a `Config`: argv parsing, a form, a fixed value in tests.
pub trait ConfigSource {
    fn load(self) -> Result<Config>;
}

impl ConfigSource for Config {
    fn load(self) -> Result<Config> {
        Ok(self)
    }
}
