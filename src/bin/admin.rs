//! CLI administration tool for url-shortener.
//!
//! Creates and resolves short links and performs database maintenance
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Resolve a token
//! cargo run --bin admin -- resolve aZ3_kP09xQ
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate --yes
//! ```
//!
//! # Environment Variables
//!
//! Uses the same configuration as the server (see `url_shortener::config`).
//! `db` commands require a PostgreSQL connection (`DATABASE_URL` or `DB_*`).

use url_shortener::application::services::ShorteningService;
use url_shortener::config::{self, Config, StorageType};
use url_shortener::domain::errors::ShortenerError;
use url_shortener::domain::repositories::MappingRepository;
use url_shortener::server;
use url_shortener::utils::db_error::is_undefined_table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create (or reuse) a short token for a URL
    Shorten {
        /// Original URL to shorten
        url: String,
    },

    /// Look up the original URL for a token
    Resolve {
        /// Short token
        token: String,
    },

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

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, url).await?,
        Commands::Resolve { token } => resolve(&config, token).await?,
        Commands::Db { action } => {
            let pool = server::connect_pool(&config).await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

/// Builds the service over the configured storage backend.
///
/// Postgres storage applies pending migrations the same way the server does.
async fn build_service(config: &Config) -> Result<ShorteningService<dyn MappingRepository>> {
    if config.storage_type == StorageType::Memory {
        println!(
            "{}",
            "⚠️  STORAGE_TYPE=memory: mappings are discarded when this command exits".yellow()
        );
    }

    let repository = server::build_repository(config).await?;
    Ok(ShorteningService::new(repository))
}

/// Shortens a URL and prints the effective token.
async fn shorten(config: &Config, url: String) -> Result<()> {
    anyhow::ensure!(!url.is_empty(), "URL must not be empty");

    let service = build_service(config).await?;
    let token = service
        .create_short_link(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short link: {}", e))?;

    println!("{}", "✅ Short link ready".green().bold());
    println!("  URL:   {}", url.cyan());
    println!("  Token: {}", token.bright_yellow().bold());

    Ok(())
}

/// Resolves a token and prints its original URL.
async fn resolve(config: &Config, token: String) -> Result<()> {
    let service = build_service(config).await?;

    match service.resolve(&token).await {
        Ok(url) => {
            println!("  Token: {}", token.bright_yellow());
            println!("  URL:   {}", url.cyan());
            Ok(())
        }
        Err(ShortenerError::NotFound { .. }) => {
            println!("{}", format!("❌ No mapping for token '{}'", token).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve token: {}", e)),
    }
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("  PostgreSQL: {}", version.bright_white());

            let mappings = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await;
            match mappings {
                Ok(count) => println!(
                    "  Mappings:   {}",
                    count.to_string().bright_green().bold()
                ),
                Err(e) if is_undefined_table(&e) => println!(
                    "  Mappings:   {}",
                    "table missing, run `admin db migrate`".yellow()
                ),
                Err(e) => return Err(e).context("Failed to count mappings"),
            }
            println!();
        }
        DbAction::Migrate { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Apply pending migrations?")
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            server::migrate(pool)
                .await
                .context("Migration failed")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
