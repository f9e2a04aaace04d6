//! File logging for the terminal frontend.
//!
//! Logs go to a per-session file under the platform cache directory, never to
//! stdout or stderr, so they cannot interleave with prompts.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup logging to a session log file
pub fn setup_logging(session_id: &Option<String>) -> Result<()> {
    let log_dir = client_bootstrap::dirs::log_dir();

    // Create session ID if not provided
    let session_id = session_id.clone().unwrap_or_else(|| {
        format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    });

    // Create session-specific log directory
    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}
