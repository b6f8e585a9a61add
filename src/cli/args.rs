//! Command line argument parsing and validation.
//!
//! Running without arguments builds the package at the default location.

use crate::bundler::DEFAULT_OUTPUT_PATH;
use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Build the placeholder LoanBondhu APK
#[derive(Parser, Debug)]
#[command(
    name = "apk_bundler",
    version,
    about = "Build the placeholder LoanBondhu APK",
    long_about = "Write a ZIP-based Android package with a fixed set of placeholder entries.

With no arguments the package is always written to public/LoanBondhu.apk.
All flags are optional overrides: --output replaces that fixed path, and
--verbose or --quiet only change how much status text is printed.

Usage:
  apk_bundler                      # writes public/LoanBondhu.apk
  apk_bundler --output dist/app.apk

The output directory must already exist."
)]
pub struct Args {
    /// Archive path to write (overwritten if present)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// List every archive entry after building
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), CliError> {
        if self.verbose && self.quiet {
            return Err(CliError::ConflictingArguments {
                arguments: vec!["--quiet".to_string(), "--verbose".to_string()],
            });
        }

        if self.output.as_os_str().is_empty() {
            return Err(CliError::InvalidArguments {
                reason: "output path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_default_path() {
        let args = Args::try_parse_from(["apk_bundler"]).unwrap();
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_output_override() {
        let args = Args::try_parse_from(["apk_bundler", "--output", "dist/app.apk"]).unwrap();
        assert_eq!(args.output, PathBuf::from("dist/app.apk"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let args = Args::try_parse_from(["apk_bundler", "-v", "-q"]).unwrap();
        assert!(matches!(
            args.validate(),
            Err(CliError::ConflictingArguments { .. })
        ));
    }

    #[test]
    fn test_empty_output_rejected() {
        // clap's path parser may already refuse the empty value
        if let Ok(args) = Args::try_parse_from(["apk_bundler", "--output", ""]) {
            assert!(matches!(
                args.validate(),
                Err(CliError::InvalidArguments { .. })
            ));
        }
    }

    #[test]
    fn test_help_describes_flags_as_optional() {
        use clap::CommandFactory;

        let command = Args::command();
        let long_about = command.get_long_about().unwrap().to_string();
        assert!(long_about.contains("always written to public/LoanBondhu.apk"));
        assert!(long_about.contains("optional overrides"));
    }

    #[test]
    fn test_runtime_config_from_args() {
        let args = Args::try_parse_from(["apk_bundler", "--verbose"]).unwrap();
        let config = RuntimeConfig::from(&args);
        assert!(config.is_verbose());
        assert!(!config.output().is_quiet());
    }
}
