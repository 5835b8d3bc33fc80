// Main entry point
use clap::Parser;
use dictionary_cli::infrastructure::config::{generate_config_sample, load_config, Logging};
use dictionary_cli::{run, AppState, Cli};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        generate_config_sample()?;
        return Ok(ExitCode::SUCCESS);
    }

    let state = AppState::new(config)?;
    let outcome = run(&cli, &state, &mut std::io::stdout()).await?;

    Ok(ExitCode::from(outcome.exit_code(state.config.strict_exit)))
}

/// Initialize logging with path and level configuration.
/// Logs never go to stdout, which carries the report.
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
