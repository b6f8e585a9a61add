//! APK Bundler - writes the placeholder LoanBondhu Android package.

use apk_bundler::cli;
use apk_bundler::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.section("Recovery suggestions");
                for suggestion in suggestions {
                    let _ = output.indent(&format!("• {suggestion}"));
                }
            }

            process::exit(1);
        }
    }
}
