use anyhow::Context;
use semver::Version;

use crate::Result;

/// Version metadata declared in the package manifest.
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide settings, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    version: Version,
}

impl Config {
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    /// Builds the config from the manifest this binary was compiled with.
    pub fn from_package() -> Result<Self> {
        Self::from_version_str(PACKAGE_VERSION)
    }

    pub fn from_version_str(raw: &str) -> Result<Self> {
        let version = Version::parse(raw)
            .with_context(|| format!("invalid package version {raw:?}"))?;
        Ok(Self::new(version))
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}
