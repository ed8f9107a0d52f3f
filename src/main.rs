use clap::Parser;
use member_rpc::cli::{settings_init, Cli};
use std::process::exit;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Tracing using RUST_LOG, info by default
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = settings_init(&cli) {
        error!("Failed to initialize settings: {}", e);
        exit(1);
    }

    // Errors are fatal for the binary, the library leaves that choice to the caller
    match cli.command.run().await {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
