use bbq_quotes::{
    cli::{self, Cli},
    config::catalog::{load_catalog, load_default_catalog},
    errors::Result,
};
use clap::Parser;
use dotenvy::dotenv;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG and CATALOG_PATH from it take effect
    let env_file = dotenv();

    // 2. Initialize tracing; logs go to stderr, command output to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    match env_file {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    // 3. Parse arguments and load the catalog (--catalog wins over CATALOG_PATH)
    let cli = Cli::parse();
    let catalog = cli
        .catalog
        .as_ref()
        .map_or_else(load_default_catalog, load_catalog)
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;

    // 4. Run the command
    let output = cli::run(&cli.command, catalog)
        .inspect_err(|e| error!("Command failed: {}", e))?;
    println!("{output}");

    Ok(())
}
