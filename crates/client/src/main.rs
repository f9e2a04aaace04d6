//! Bowling score tracker binary.
//!
//! Main entry point for the bowling client.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. GameSession (entry engine + storage) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: line-oriented terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Store games under a custom directory
//! BOWLING_DATA_DIR=./games cargo run -p bowling-client
//!
//! # Try it out without writing anything
//! BOWLING_STORAGE=memory cargo run -p bowling-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use bowling_client::Client;
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&runtime_config.session_id)?;

    tracing::info!("Starting bowling client");
    for warning in runtime_config
        .warnings
        .iter()
        .chain(&frontend_config.warnings)
    {
        tracing::warn!("{}", warning);
    }
    tracing::info!("Storage: {}", runtime_config.storage);

    // 3. Build session (independent layer)
    let setup = RuntimeBuilder::new().config(runtime_config).build()?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build Client (composition layer) and run
    let client = Client::builder()
        .session(setup.session)
        .frontend(frontend)
        .build()?;

    client.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
