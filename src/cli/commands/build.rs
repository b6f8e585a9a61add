//! Build command implementation.
//!
//! Writes the placeholder APK and prints a summary of the artifact.

use crate::bundler::{self, BundledArtifact, Bundler, SettingsBuilder};
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

/// Message printed once the archive has been closed.
pub const SUCCESS_MESSAGE: &str = "Valid APK created successfully!";

/// Execute the build
pub(super) fn execute_build(args: &Args, config: &RuntimeConfig) -> Result<BundledArtifact> {
    let output = config.output();

    let settings = SettingsBuilder::new().output_path(&args.output).build()?;
    if let Some(dir) = settings.output_directory() {
        output.verbose(&format!("Output directory: {}", dir.display()))?;
    }

    output.progress(&format!(
        "Creating {} Android package...",
        bundler::APP_LABEL
    ))?;

    let artifact = Bundler::new(settings).bundle()?;

    output.success(SUCCESS_MESSAGE)?;
    print_artifact_summary(&artifact, config)?;

    Ok(artifact)
}

fn print_artifact_summary(artifact: &BundledArtifact, config: &RuntimeConfig) -> Result<()> {
    let output = config.output();

    for path in &artifact.paths {
        output.field("File", &path.display().to_string())?;
    }
    output.field("Package", bundler::PACKAGE_ID)?;
    output.field(
        "Version",
        &format!("{} ({})", bundler::VERSION_NAME, bundler::VERSION_CODE),
    )?;
    output.field(
        "SDK",
        &format!("min {} / target {}", bundler::MIN_SDK, bundler::TARGET_SDK),
    )?;
    output.field("Size", &format!("{} bytes", artifact.size))?;
    output.field("SHA256", &artifact.checksum)?;
    output.field("Entries", &artifact.entries.len().to_string())?;

    if config.is_verbose() {
        output.section("Archive entries")?;
        for name in &artifact.entries {
            output.indent(name)?;
        }
    }

    Ok(())
}
