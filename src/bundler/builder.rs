//! Bundle orchestration.
//!
//! This module provides the [`Bundler`] that drives the platform writer and
//! collects artifact metadata.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`]
//! 2. Delegates to the platform module for the requested package type
//! 3. Calculates size and checksum of the produced file
//! 4. Returns a [`BundledArtifact`]
//!
//! # Example
//!
//! ```no_run
//! use apk_bundler::bundler::{Bundler, SettingsBuilder};
//!
//! let settings = SettingsBuilder::new()
//!     .output_path("public/LoanBondhu.apk")
//!     .build()?;
//!
//! let artifact = Bundler::new(settings).bundle()?;
//! println!("Created: {} ({} bytes)", artifact.package_type, artifact.size);
//! println!("SHA256: {}", artifact.checksum);
//! # Ok::<(), apk_bundler::bundler::Error>(())
//! ```

use crate::bail;
use crate::bundler::{
    BundledArtifact, PackageType, Result, Settings,
    error::{Context, ErrorExt},
    platform::android,
};
use std::{fs::File, io::Read, path::Path};

/// Main bundler orchestrator.
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Builds the APK described by the entry table.
    pub fn bundle(&self) -> Result<BundledArtifact> {
        self.bundle_type(PackageType::Apk)
    }

    /// Builds a specific package type.
    ///
    /// Each call overwrites the previous artifact at the same path.
    pub fn bundle_type(&self, package_type: PackageType) -> Result<BundledArtifact> {
        let (paths, entries) = match package_type {
            PackageType::Apk => {
                let paths = android::bundle_project(&self.settings)
                    .context("failed to write apk archive")?;
                let entries = android::entries::entries()
                    .iter()
                    .map(|e| e.name().to_string())
                    .collect::<Vec<_>>();
                (paths, entries)
            }
        };

        let Some(main_path) = paths.first() else {
            bail!(
                "Platform bundler for {:?} returned no paths - this indicates a bundler bug",
                package_type
            );
        };

        let size = std::fs::metadata(main_path)
            .fs_context("reading artifact metadata", main_path)?
            .len();
        let checksum = calculate_sha256(main_path)?;

        log::debug!("{} checksum: {}", main_path.display(), checksum);

        Ok(BundledArtifact {
            package_type,
            paths,
            size,
            checksum,
            entries,
        })
    }
}

/// Calculates the SHA-256 checksum of a file.
///
/// Reads in 8KB chunks and returns the lowercase hex digest (64 characters).
pub fn calculate_sha256(path: &Path) -> Result<String> {
    use sha2::{Digest, Sha256};

    let mut file = File::open(path).fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
