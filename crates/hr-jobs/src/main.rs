//! HR jobs worker entry point
//!
//! Run with:
//! ```bash
//! cargo run -p hr-jobs
//! ```
//!
//! Configuration is loaded from environment variables or a .env file.

use hr_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the worker
    if let Err(e) = run().await {
        error!(error = %e, "Jobs worker failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting HR jobs worker...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        run_hour = config.jobs.daily_run_hour,
        "Configuration loaded"
    );

    // Run the scheduler loop
    hr_jobs::run(config).await?;

    Ok(())
}
