mod listen;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "abvcheck")]
#[command(about = "Checks whether beers sold by Bordershop and Systembolaget are approved")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a single search and print the report
    Search {
        /// Beer name to search for
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Read chat commands (`/search`, `/help`) from stdin and print replies
    Listen {
        /// Username used when `/search` has no argument
        #[arg(long, env = "ABVCHECK_REQUESTER")]
        username: Option<String>,
        /// Fallback name when no username is set
        #[arg(long)]
        first_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = abvcheck_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let aggregator = pipeline::build_aggregator(&config)?;

    match cli.command {
        Commands::Search { term } => {
            let reply = aggregator.search_reply(&term.join(" ")).await;
            println!("{}", reply.trim_end());
        }
        Commands::Listen {
            username,
            first_name,
        } => {
            let requester = abvcheck_search::Requester {
                username,
                first_name,
            };
            listen::run(&aggregator, &requester).await?;
        }
    }

    Ok(())
}
