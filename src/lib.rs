//! # APK Bundler
//!
//! Assembles a placeholder Android application package: a ZIP container
//! holding a manifest document, stub DEX and resource-table payloads, signing
//! metadata placeholders, a text asset, launcher icon placeholders and a
//! strings resource.
//!
//! The entry set is a static table, so every build is byte-identical.
//!
//! ## Usage
//!
//! ```bash
//! apk_bundler                         # writes public/LoanBondhu.apk
//! apk_bundler --output dist/app.apk   # custom location
//! apk_bundler --verbose               # list every archive entry
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export main types for public API
pub use bundler::{BundledArtifact, Bundler, PackageType, Settings, SettingsBuilder};
pub use cli::Args;
pub use error::{CliError, PackagerError, Result};
