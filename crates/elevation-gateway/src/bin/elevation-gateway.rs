//! Agent Elevation gateway binary
//!
//! # Usage
//! ```bash
//! elevation-gateway [--port 8420] [--host 127.0.0.1] [--config gateway.json] [--seed N] [--strict] [--verbose]
//! ```
//!
//! `RUST_LOG` overrides the log level chosen by `--verbose`.

use std::path::PathBuf;

use clap::Parser;
use elevation_gateway::{init_tracing, print_banner, ConfigOverrides, Gateway, GatewayConfig};

/// Agent Elevation API - get your agents to new heights
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (default: 8420, or the config file's value)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (default: 127.0.0.1, or the config file's value)
    #[arg(long)]
    host: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible responses
    #[arg(long)]
    seed: Option<u64>,

    /// Answer lookup failures with 400 instead of 200
    #[arg(long)]
    strict: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(args.verbose);

    let config = GatewayConfig::load(
        args.config.as_deref(),
        ConfigOverrides {
            host: args.host,
            port: args.port,
            seed: args.seed,
            strict_status: args.strict,
        },
    )?;

    print_banner(&config.host, config.port);

    let gateway = Gateway::new(config);
    gateway.start().await?;

    Ok(())
}
