//! CLI

use crate::config::{init_default_dir, init_global_settings, load_settings, ClientSettings, Settings};
use crate::error::RpcError;
use crate::rpc::{RpcClient, RpcServer};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "member-rpc",
    about = "gRPC member service and json relay client",
    author,
    help_template = "\
{before-help}{name}

{about-with-newline}
{author-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
",
    version
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Set folder for the settings file - default is HOME/.member-rpc
    #[arg(short, long, global = true)]
    dirsettings: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the RPC server configured in the [rpc] section
    Serve,
    /// Send a json payload to a remote host and print the reply
    Send {
        /// Remote host, without port
        #[arg(short, long)]
        address: String,
        /// Override the port from the [client] section
        #[arg(short, long)]
        port: Option<u16>,
        /// Payload sent as is
        payload: String,
    },
    /// Print the version reported by a remote host
    Version {
        /// Remote host, without port
        #[arg(short, long)]
        address: String,
        /// Override the port from the [client] section
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Initialize the settings file and create the global config variable
/// Default folder is HOME but user can specify a custom folder with dirsettings (-d ) parameter from CLI
/// Example: member-rpc -d /user_folder/member-rpc serve
pub fn settings_init(cli: &Cli) -> Result<(), RpcError> {
    // Select config folder from CLI or default to HOME/.member-rpc
    // create config file if it doesn't exist
    let settings_dir = init_default_dir(cli.dirsettings.clone())?;
    let settings = load_settings(&settings_dir)?;
    info!("Loaded settings from {}", settings_dir.display());

    init_global_settings(settings)
}

fn client_settings(port: Option<u16>) -> ClientSettings {
    let mut settings = Settings::get_client().clone();
    if let Some(port) = port {
        settings.port = port;
    }
    settings
}

impl Commands {
    /// Run the command, returning the text to print on success
    pub async fn run(&self) -> Result<Option<String>, RpcError> {
        match self {
            Commands::Serve => {
                if !RpcServer::is_enabled() {
                    return Err(RpcError::Config(
                        "rpc server is disabled in settings".to_string(),
                    ));
                }
                RpcServer::new().start().await?;
                Ok(None)
            }
            Commands::Send {
                address,
                port,
                payload,
            } => {
                let mut client = RpcClient::from_settings(address, &client_settings(*port)).await?;
                let reply = client.send(payload.as_str()).await?;
                client.close();
                Ok(Some(reply))
            }
            Commands::Version { address, port } => {
                let mut client = RpcClient::from_settings(address, &client_settings(*port)).await?;
                let version = client.get_version().await?;
                client.close();
                Ok(Some(version))
            }
        }
    }
}
