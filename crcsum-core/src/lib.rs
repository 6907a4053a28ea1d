pub mod config;
pub mod enumerate;
pub mod error;
pub mod generate;
pub mod hash;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod run;
pub mod verify;

pub use error::{CrcError, CrcResult};
pub use manifest::{Manifest, ManifestEntry};
pub use verify::VerificationResult;
