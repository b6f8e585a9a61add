//! Error types for apk_bundler operations.
//!
//! This module defines the top-level error with actionable recovery suggestions.

use std::io;
use thiserror::Error;

/// Result type alias for apk_bundler operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all apk_bundler operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Conflicting arguments
    #[error("Conflicting arguments: {arguments:?}")]
    ConflictingArguments {
        /// Arguments that conflict
        arguments: Vec<String>,
    },
}

impl PackagerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagerError::Bundler(err) => match err.io_kind() {
                Some(io::ErrorKind::NotFound) => vec![
                    "Create the output directory before building: mkdir -p public".to_string(),
                    "Or pass --output with a path inside an existing directory".to_string(),
                ],
                Some(io::ErrorKind::PermissionDenied) => vec![
                    "Check write permissions on the output directory".to_string(),
                ],
                Some(io::ErrorKind::NotADirectory) => vec![
                    "A component of the output path is a file, not a directory".to_string(),
                    "Replace it with a directory or pass --output with another path".to_string(),
                ],
                Some(_) => vec![
                    "Check that the output path is writable and retry the whole build".to_string(),
                ],
                None => vec!["Check the error message above for specific details".to_string()],
            },
            PackagerError::Cli(CliError::ConflictingArguments { arguments }) => vec![format!(
                "Use only one of: {}",
                arguments.join(", ")
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ErrorExt;

    #[test]
    fn test_missing_directory_suggests_mkdir() {
        let bundler_err = Err::<(), _>(io::Error::from(io::ErrorKind::NotFound))
            .fs_context("creating apk archive", "public/LoanBondhu.apk")
            .unwrap_err();
        let err = PackagerError::from(bundler_err);

        let suggestions = err.recovery_suggestions();
        assert!(suggestions.iter().any(|s| s.contains("mkdir -p public")));
    }

    #[test]
    fn test_file_in_place_of_directory_suggestion() {
        let bundler_err = Err::<(), _>(io::Error::from(io::ErrorKind::NotADirectory))
            .fs_context("creating apk archive", "public/LoanBondhu.apk")
            .unwrap_err();
        let suggestions = PackagerError::from(bundler_err).recovery_suggestions();

        assert!(suggestions.iter().any(|s| s.contains("not a directory")));
        assert!(!suggestions.iter().any(|s| s.contains("disk space")));
    }

    #[test]
    fn test_other_io_error_suggestion_is_neutral() {
        let bundler_err = Err::<(), _>(io::Error::from(io::ErrorKind::AlreadyExists))
            .fs_context("creating apk archive", "public/LoanBondhu.apk")
            .unwrap_err();
        let suggestions = PackagerError::from(bundler_err).recovery_suggestions();

        assert_eq!(
            suggestions,
            vec!["Check that the output path is writable and retry the whole build".to_string()]
        );
    }

    #[test]
    fn test_conflicting_arguments_suggestion() {
        let err = PackagerError::from(CliError::ConflictingArguments {
            arguments: vec!["--quiet".to_string(), "--verbose".to_string()],
        });
        assert_eq!(
            err.recovery_suggestions(),
            vec!["Use only one of: --quiet, --verbose".to_string()]
        );
    }
}
