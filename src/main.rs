use addr_book::utils::{logger, validation::Validate};
use addr_book::{CliConfig, Notebook, RecordStore, Shell};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Config errors surface through anyhow and exit with status 1.
    let config = cli.resolve().with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config file '{}'", path.display()),
        None => "Failed to build default configuration".to_string(),
    })?;
    config.validate().context("Configuration validation failed")?;

    logger::init_cli_logger(cli.verbose, config.log_level());
    tracing::debug!("Resolved config: {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(
        Notebook::new(),
        stdin.lock(),
        stdout.lock(),
        config.shell_options(),
    );

    if let Err(e) = shell.run() {
        tracing::error!("❌ Session ended: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let (store, _) = shell.into_parts();
    tracing::info!("Session closed with {} record(s) in memory", store.len());
    Ok(())
}
