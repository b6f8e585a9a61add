//! Placeholder Android package bundler.
//!
//! Assembles a ZIP-based `.apk` container from a static entry table: a
//! manifest document, placeholder DEX and resource-table payloads, signing
//! metadata placeholders, a text asset, launcher icon placeholders and a
//! strings resource.
//!
//! # Integration
//!
//! ```no_run
//! use apk_bundler::bundler::{Bundler, SettingsBuilder};
//!
//! let settings = SettingsBuilder::new().build()?;
//! let artifact = Bundler::new(settings).bundle()?;
//! for path in &artifact.paths {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), apk_bundler::bundler::Error>(())
//! ```

#![warn(missing_docs)]

mod builder;
pub(crate) mod error;
pub(crate) mod platform;
mod settings;

// Public re-exports
pub use builder::{Bundler, calculate_sha256};
pub use error::{Context, Error, ErrorExt, Result};
pub use platform::PackageType;
pub use platform::android::entries::{
    APK_ENTRIES, APP_LABEL, ARSC_MAGIC, ArchiveEntry, CERT_PLACEHOLDER_LEN, DEX_MAGIC, MIN_SDK,
    PACKAGE_ID, PNG_SIGNATURE, TARGET_SDK, VERSION_CODE, VERSION_NAME, entries,
};
pub use settings::{DEFAULT_OUTPUT_PATH, Settings, SettingsBuilder};

/// A bundled artifact result.
///
/// # Fields
///
/// - `package_type`: The format of the created package
/// - `paths`: All files created as part of this bundle
/// - `size`: Size of the main artifact in bytes
/// - `checksum`: SHA-256 checksum for integrity verification
/// - `entries`: Archive member names in write order
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// The package type that was created.
    pub package_type: PackageType,

    /// Paths to all files created as part of this bundle.
    pub paths: Vec<std::path::PathBuf>,

    /// Size of the main artifact in bytes.
    pub size: u64,

    /// SHA-256 checksum of the main artifact, lowercase hex.
    pub checksum: String,

    /// Names of the archive members, in the order they were written.
    pub entries: Vec<String>,
}
