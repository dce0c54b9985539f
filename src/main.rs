//! ValueCell API binary.
//!
//! ```text
//! valuecell-api [--config FILE] serve [--bind ADDR]
//! valuecell-api [--config FILE] invoke [--request JSON | --file FILE]
//! ```
//!
//! `serve` is the default. `invoke` runs one request descriptor through the
//! dispatcher and prints the response descriptor, the same contract a
//! serverless platform drives.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use valuecell_api::config::{self, ConfigError, ServiceConfig};
use valuecell_api::{dispatch, lifecycle, observability};

#[derive(Parser)]
#[command(name = "valuecell-api", version)]
#[command(about = "ValueCell API request router", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the API over HTTP
    Serve {
        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Dispatch one JSON request descriptor and print the response descriptor
    Invoke {
        /// Request descriptor as inline JSON
        #[arg(short, long, conflicts_with = "file")]
        request: Option<String>,

        /// Read the request descriptor from a file (stdin when neither is given)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };

    observability::logging::init(&config.observability)?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
                config::validate_config(&config).map_err(ConfigError::Validation)?;
            }

            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                bind_address = %config.listener.bind_address,
                request_timeout_secs = config.timeouts.request_secs,
                max_body_size = config.limits.max_body_size,
                "valuecell-api starting"
            );

            lifecycle::startup::serve(config).await?;
        }
        Commands::Invoke { request, file } => {
            let raw = read_invocation(request, file, io::stdin())?;

            let response = dispatch::invoke(&raw)?;
            tracing::debug!(status = response.status_code, "Invocation complete");
            println!("{}", response.to_json());
        }
    }

    Ok(())
}

/// Pick the invocation payload: inline JSON, then a file, then `stdin`.
fn read_invocation(
    request: Option<String>,
    file: Option<PathBuf>,
    stdin: impl Read,
) -> io::Result<String> {
    match (request, file) {
        (Some(request), _) => Ok(request),
        (None, Some(path)) => fs::read_to_string(path),
        (None, None) => io::read_to_string(stdin),
    }
}
