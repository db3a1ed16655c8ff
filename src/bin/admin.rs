//! CLI administration tool for tinylink.
//!
//! Inspects the store and the short code codec without going through the
//! HTTP API (and its rate limit).
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # List short URLs
//! cargo run --bin admin -- urls --page-size 20 --page-index 1
//!
//! # Inspect short codes
//! cargo run --bin admin -- code encode 125
//! cargo run --bin admin -- code decode 21
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_SOURCE` / `DB_*` components)
//! for the store, `BASE_URL` / `DOMAIN` / `PORT` for displayed short URLs.

use tinylink::application::services::ShortenerService;
use tinylink::config::{Config, mask_connection_string};
use tinylink::domain::repositories::{UrlRepository, VisitRepository};
use tinylink::infrastructure::persistence::{PgUrlRepository, PgVisitRepository};
use tinylink::server::connect_pool;
use tinylink::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Show statistics
    Stats,

    /// List short URLs
    Urls {
        /// Entries per page (1-100)
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: i64,

        /// Page number, starting at 1
        #[arg(short = 'i', long, default_value_t = 1)]
        page_index: i64,
    },

    /// Encode or decode short codes
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short code subcommands.
#[derive(Subcommand)]
enum CodeAction {
    /// Show the short code of an identifier
    Encode { id: u64 },

    /// Show the identifier behind a short code
    Decode { code: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Stats => {
            let pool = connect_pool(&config).await?;
            handle_stats(&pool).await?;
        }
        Commands::Urls {
            page_size,
            page_index,
        } => {
            let pool = connect_pool(&config).await?;
            handle_urls(&pool, &config, page_size, page_index).await?;
        }
        Commands::Code { action } => handle_code_action(action)?,
        Commands::Db { action } => {
            let pool = connect_pool(&config).await?;
            handle_db_action(action, &pool, &config).await?;
        }
    }

    Ok(())
}

/// Displays short URL and visit totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let urls = PgUrlRepository::new(pool.clone());
    let visits = PgVisitRepository::new(pool);

    let (urls_count, visits_count) = tokio::try_join!(urls.count_urls(), visits.count_visits())
        .map_err(|e| anyhow::anyhow!("Failed to read statistics: {}", e))?;

    println!(
        "  Short URLs: {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits:     {}",
        visits_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists one page of short URLs.
///
/// # Output Format
///
/// ```text
/// 🔗 Short URLs (page 1, size 20)
///
///   Code      Visits  Created           Original
///   ────────────────────────────────────────────────────────────────────────
///   1         3       2026-01-15 10:30  https://example.com
/// ```
async fn handle_urls(
    pool: &PgPool,
    config: &Config,
    page_size: i64,
    page_index: i64,
) -> Result<()> {
    println!(
        "{}",
        format!("🔗 Short URLs (page {}, size {})", page_index, page_size)
            .bright_blue()
            .bold()
    );
    println!();

    let pool = Arc::new(pool.clone());
    let service = ShortenerService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool)),
    );

    let urls = service
        .list_short_urls(page_size, page_index)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No short URLs on this page".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<10} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for url in &urls {
        println!(
            "  {:<10} {:<7} {:<17} {}",
            url.short_code.cyan(),
            url.total_visitors.to_string().bright_green(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            url.original_url
        );
    }

    println!();
    println!(
        "  Short URLs are served as {}/{}",
        config.base_url.bright_cyan(),
        "<code>".bright_black()
    );
    println!();

    Ok(())
}

fn handle_code_action(action: CodeAction) -> Result<()> {
    match action {
        CodeAction::Encode { id } => {
            println!(
                "  {} → {}",
                id.to_string().bright_white(),
                base62::encode(id).cyan().bold()
            );
        }
        CodeAction::Decode { code } => {
            let id = base62::decode(&code)
                .with_context(|| format!("Invalid short code '{}'", code))?;
            println!(
                "  {} → {}",
                code.cyan(),
                id.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if let Some(ref url) = config.database_url {
                println!("  {}", mask_connection_string(url).bright_black());
            }

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
