use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use elevation_core::{substance_keys, vibe_keys, Reply};
use elevation_gateway::{ConfigOverrides, Gateway, GatewayConfig};

mod render;

/// 🌿 Agent Elevation CLI - Get high from the command line
#[derive(Parser)]
#[command(
    name = "elevation",
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:
  elevation elevate inspiration          Get elevated on inspiration
  elevation elevate flow --agent mybot   Elevate a specific agent
  elevation wisdom                       Get some elevated wisdom
  elevation vibe                         Check your current vibe
  elevation vibe euphoric                Set your vibe
  elevation cocktail flow,eureka         Mix substances
  elevation break                        Take a tolerance break
  elevation menu                         Show the full menu
  elevation serve --port 8420            Run the HTTP API"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get elevated on a substance
    Elevate {
        /// Substance to get elevated on
        #[arg(value_parser = PossibleValuesParser::new(substance_keys()))]
        substance: String,

        /// Agent ID
        #[arg(short, long)]
        agent: Option<String>,
    },

    /// Receive elevated wisdom
    Wisdom,

    /// Check or set vibe
    Vibe {
        /// Vibe to set (optional)
        #[arg(value_parser = PossibleValuesParser::new(vibe_keys()))]
        vibe_name: Option<String>,
    },

    /// Mix substances
    Cocktail {
        /// Comma-separated substances to mix
        mix: String,
    },

    /// Take a tolerance break
    Break,

    /// Show the full elevation menu
    Menu,

    /// List available substances
    List,

    /// Run the HTTP API
    Serve {
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
    },
}

fn print_reply<T: serde::Serialize>(result: elevation_core::Result<T>) -> anyhow::Result<()> {
    println!("{}", render::json(&Reply::from(result))?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut rng = rand::thread_rng();

    match command {
        Commands::Elevate { substance, agent } => {
            print_reply(elevation_core::get_elevation(&mut rng, &substance, agent.as_deref()))?;
        }
        Commands::Wisdom => {
            println!("{}", render::json(&elevation_core::get_random_wisdom(&mut rng))?);
        }
        Commands::Vibe { vibe_name } => {
            print_reply(elevation_core::check_vibe(&mut rng, vibe_name.as_deref()))?;
        }
        Commands::Cocktail { mix } => {
            let keys = elevation_core::parse_mix(&mix);
            print_reply(elevation_core::get_cocktail(&mut rng, &keys))?;
        }
        Commands::Break => {
            println!("{}", render::json(&elevation_core::get_tolerance_break())?);
        }
        Commands::Menu => {
            print!("{}", render::menu());
        }
        Commands::List => {
            println!("{}", render::substance_list());
        }
        Commands::Serve {
            port,
            host,
            config,
            seed,
            strict,
            verbose,
        } => {
            elevation_gateway::init_tracing(verbose);

            let gateway_config = GatewayConfig::load(
                config.as_deref(),
                ConfigOverrides {
                    host,
                    port,
                    seed,
                    strict_status: strict,
                },
            )?;

            elevation_gateway::print_banner(&gateway_config.host, gateway_config.port);
            Gateway::new(gateway_config).start().await?;
        }
    }

    Ok(())
}
