use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use folio_admin::cli::Args;
use folio_admin::commands;
use folio_admin::config::Config;
use folio_admin::error::ApiError;
use folio_admin::ui::{display_api_error, display_error};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load configuration
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            display_error(&format!("{:#}", e));
            process::exit(1);
        }
    };

    init_tracing(config.verbose);

    if let Err(e) = commands::run(args, config).await {
        match e.downcast_ref::<ApiError>() {
            Some(api_error) => display_api_error(api_error),
            None => display_error(&format!("{:#}", e)),
        }
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` turns on debug output for this crate.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "folio_admin=debug"
    } else {
        "folio_admin=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
