//! Entry point for the locale synchronization tool.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Runs a sync in the current directory and maps the outcome to an exit code.
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let workspace_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("Failed to resolve the working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match locale_sync::sync_workspace(&workspace_root) {
        Ok(report) => {
            tracing::info!(
                locales = report.locales.len(),
                base_keys = report.base_key_count,
                "Locales synchronized"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
