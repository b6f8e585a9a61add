//! Command execution.

mod build;

use crate::cli::{Args, RuntimeConfig};
use crate::error::{PackagerError, Result};

use build::execute_build;
pub use build::SUCCESS_MESSAGE;

/// Execute the build described by the parsed arguments.
///
/// Returns the process exit code. Argument errors are reported here and map
/// to `1`; build errors are returned to the caller.
pub fn execute_command(args: Args) -> Result<i32> {
    if let Err(validation_error) = args.validate() {
        // Never quiet for validation errors
        let output = super::OutputManager::new(false, false);
        output.error(&validation_error.to_string());
        let suggestions = PackagerError::from(validation_error).recovery_suggestions();
        for suggestion in suggestions {
            let _ = output.indent(&format!("• {suggestion}"));
        }
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);
    let artifact = execute_build(&args, &config)?;

    log::debug!(
        "Built {} with {} entries",
        artifact.package_type,
        artifact.entries.len()
    );
    Ok(0)
}
