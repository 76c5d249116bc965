//! CLI administration tool for url-pair-shortener.
//!
//! Works directly against the pair store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://google.com
//!
//! # Look up a code
//! cargo run --bin admin -- resolve 46plOCsbuD
//!
//! # Delete by code or by original URL
//! cargo run --bin admin -- delete 46plOCsbuD -y
//!
//! # List all pairs
//! cargo run --bin admin -- list
//!
//! # Talk to the bot on the console
//! cargo run --bin admin -- chat
//!
//! # Check database connection / create the schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_pair_shortener::config`.

use url_pair_shortener::application::services::ShortenerService;
use url_pair_shortener::bot::BotDispatcher;
use url_pair_shortener::bot::console::run_console;
use url_pair_shortener::config::{self, Config};
use url_pair_shortener::domain::repositories::PairRepository;
use url_pair_shortener::infrastructure::persistence::{SqlitePairRepository, connect_pool};
use url_pair_shortener::state::SqliteShortenerService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use tokio::io::BufReader;

/// CLI tool for managing url-pair-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Show the original URL behind a code
    Resolve {
        /// Short code
        code: String,
    },

    /// Delete a pair by short code or original URL
    Delete {
        /// Short code, or an absolute URL
        identifier: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all pairs
    List,

    /// Chat with the bot on stdin/stdout
    Chat,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the schema if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = open_repository(&config).await?;
    let service: Arc<SqliteShortenerService> =
        Arc::new(ShortenerService::new(repository.clone()));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &config, &url).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Delete { identifier, yes } => delete(&service, &identifier, yes).await?,
        Commands::List => list(&service, &config).await?,
        Commands::Chat => chat(service, &config).await?,
        Commands::Db { action } => handle_db_action(action, &repository).await?,
    }

    Ok(())
}

/// Connects to the configured database and makes sure the schema exists.
async fn open_repository(config: &Config) -> Result<Arc<SqlitePairRepository>> {
    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    let repository = Arc::new(SqlitePairRepository::new(Arc::new(pool)));
    repository
        .initialize()
        .await
        .context("Failed to initialize schema")?;

    Ok(repository)
}

async fn shorten(service: &SqliteShortenerService, config: &Config, url: &str) -> Result<()> {
    let code = service
        .create_url_pair(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short link created".green().bold());
    println!();
    println!("  Code: {}", code.bright_white().bold());
    println!("  Link: {}", config.short_link(&code).cyan());
    println!();

    Ok(())
}

async fn resolve(service: &SqliteShortenerService, code: &str) -> Result<()> {
    let url = service
        .resolve_short_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve code: {}", e))?;

    println!("{}", url);
    Ok(())
}

/// Deletes a pair after confirmation (default: No) unless `-y` is passed.
async fn delete(service: &SqliteShortenerService, identifier: &str, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete URL pair".bright_blue().bold());
    println!();
    println!("  Identifier: {}", identifier.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this pair?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_pair(identifier)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete pair: {}", e))?;

    println!("{}", "✅ Pair deleted".green().bold());
    println!();

    Ok(())
}

/// Lists all pairs.
///
/// # Output Format
///
/// ```text
/// 📋 URL Pairs
///
///   Code        Created              Original URL
///   ───────────────────────────────────────────────────────────
///   46plOCsbuD  2024-01-15 10:30     https://google.com/
/// ```
async fn list(service: &SqliteShortenerService, config: &Config) -> Result<()> {
    println!("{}", "📋 URL Pairs".bright_blue().bold());
    println!();

    let pairs = service
        .list_pairs()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list pairs: {}", e))?;

    if pairs.is_empty() {
        println!("{}", "  No pairs found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<11} {:<20} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for pair in &pairs {
        println!(
            "  {:<11} {:<20} {}",
            pair.short_code.cyan(),
            pair.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            pair.original_url
        );
    }

    println!();
    println!(
        "  Total: {}  (links start with {})",
        pairs.len().to_string().bright_white().bold(),
        config.public_base_url.bright_black()
    );
    println!();

    Ok(())
}

/// Runs the bot on stdin/stdout until EOF.
async fn chat(service: Arc<SqliteShortenerService>, config: &Config) -> Result<()> {
    println!("{}", "💬 Bot console (Ctrl+D to exit)".bright_blue().bold());
    println!();

    let dispatcher = BotDispatcher::new(service, config.public_base_url.clone());
    run_console(
        &dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: &SqlitePairRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            repository
                .initialize()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize schema: {}", e))?;

            println!("{}", "✅ Schema ready".green().bold());
        }
    }

    Ok(())
}
