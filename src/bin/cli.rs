//! PTT client CLI
//!
//! Fetches a page kind and prints the extracted records as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use ptt_crawler::{PttClient, error::Result, models::Config};

/// ptt - PTT bulletin board extractor
#[derive(Parser, Debug)]
#[command(name = "ptt", version, about = "Extract boards and posts from PTT")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the hot boards
    Hot,

    /// List a board group
    Groups {
        /// Group page (default: root group)
        page: Option<String>,
    },

    /// List a page of a board
    Board {
        #[arg(default_value = "Gossiping")]
        name: String,

        /// Page id (default: newest page)
        #[arg(long)]
        page: Option<String>,
    },

    /// Show a post, e.g. `Gossiping/M.1729312496.A.1B2`
    Post { path: String },

    /// List an archive directory of a board
    Archive {
        board: String,

        /// Directory path below the board
        #[arg(long)]
        page: Option<String>,
    },

    /// Search a board
    Search {
        board: String,
        keyword: String,

        #[arg(long)]
        page: Option<String>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Using base URL {}", config.site.base_url);

    if let Command::Validate = cli.command {
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Config OK");
        return Ok(());
    }

    let client = PttClient::new(Arc::new(config))?;

    match cli.command {
        Command::Hot => print_json(&client.hot_boards().await?)?,
        Command::Groups { page } => print_json(&client.group_boards(page.as_deref()).await?)?,
        Command::Board { name, page } => {
            let listing = client.board(&name, page.as_deref()).await?;
            if listing.age_gated {
                log::info!("{} is age restricted; consent cookie was sent", name);
            }
            print_json(&listing)?
        }
        Command::Post { path } => print_json(&client.post(&path).await?)?,
        Command::Archive { board, page } => {
            print_json(&client.board_archive(&board, page.as_deref()).await?)?
        }
        Command::Search {
            board,
            keyword,
            page,
        } => print_json(&client.search_posts(&board, &keyword, page.as_deref()).await?)?,
        Command::Validate => {}
    }

    Ok(())
}
