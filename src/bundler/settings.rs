//! Configuration structures for bundling operations.
//!
//! The artifact content is fixed; the only setting is where it is written.

use crate::bundler::error::{Context, Result};
use std::path::{Path, PathBuf};

/// Output path used when none is configured, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "public/LoanBondhu.apk";

/// Bundler settings.
///
/// Constructed through [`SettingsBuilder`].
///
/// # Examples
///
/// ```
/// use apk_bundler::bundler::SettingsBuilder;
///
/// let settings = SettingsBuilder::new().build()?;
/// assert_eq!(settings.output_path().to_str(), Some("public/LoanBondhu.apk"));
/// # Ok::<(), apk_bundler::bundler::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    output_path: PathBuf,
}

impl Settings {
    /// Returns the path of the archive to produce.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the directory that must exist before bundling.
    ///
    /// `None` when the output path has no parent component (bare file name).
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    output_path: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive output path.
    ///
    /// Default: [`DEFAULT_OUTPUT_PATH`]
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// Fails if the output path has no file name component (e.g. `""` or `"dir/.."`).
    pub fn build(self) -> Result<Settings> {
        let output_path = self
            .output_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        output_path
            .file_name()
            .with_context(|| format!("output path {:?} does not name a file", output_path))?;

        Ok(Settings { output_path })
    }
}
