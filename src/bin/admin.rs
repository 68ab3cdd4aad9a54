//! CLI administration tool for quicklink.
//!
//! Inspects and removes short links directly in the PostgreSQL store,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every link, newest first
//! cargo run --bin admin -- list
//!
//! # Show one link
//! cargo run --bin admin -- stats aB3xY9k
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- delete aB3xY9k
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): when set, full short URLs are printed

use quicklink::application::services::LinkService;
use quicklink::error::AppError;
use quicklink::infrastructure::persistence::PgLinkRepository;
use quicklink::utils::code_generator::is_valid_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type PgLinkService = LinkService<PgLinkRepository>;

/// CLI tool for managing quicklink.
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
    /// List all links
    List,

    /// Show a single link with its click count
    Stats {
        /// Short code of the link
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code of the link
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let base_url = std::env::var("BASE_URL").unwrap_or_default();

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = LinkService::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        base_url,
    );

    match cli.command {
        Commands::List => list_links(&service).await?,
        Commands::Stats { code } => show_link(&service, &code).await?,
        Commands::Delete { code, yes } => delete_link(&service, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists all links in a table.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code     Clicks   Created            Long URL
///   ───────────────────────────────────────────────────────────────
///   aB3xY9k  12       2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<16} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<16} {:<8} {:<18} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every field of one link.
async fn show_link(service: &PgLinkService, code: &str) -> Result<()> {
    ensure_valid_code(code)?;

    let link = match service.stats(code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No link with code '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load link: {}", e)),
    };

    println!("{}", "Link".bright_blue().bold());
    println!();
    println!("  Code:     {}", link.short_code.cyan());
    if !service.base_url().is_empty() {
        println!(
            "  Short:    {}",
            service.short_url(&link.short_code).bright_white()
        );
    }
    println!("  Long URL: {}", link.long_url);
    println!(
        "  Clicks:   {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:  {}",
        link.created_at.to_rfc3339().bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
///
/// Confirmation defaults to No and is skipped with `--yes`.
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    ensure_valid_code(code)?;

    println!("{}", "Delete Link".bright_blue().bold());
    println!();

    let link = match service.stats(code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No link with code '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load link: {}", e)),
    };

    println!("  Code:     {}", link.short_code.cyan());
    println!("  Long URL: {}", link.long_url);
    println!("  Clicks:   {}", link.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    if deleted {
        println!("{}", "Link deleted".green().bold());
    } else {
        println!("{}", "Link was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            let clicks: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!("  Clicks:     {}", clicks.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn ensure_valid_code(code: &str) -> Result<()> {
    if !is_valid_code(code) {
        anyhow::bail!("'{}' is not a valid short code", code);
    }
    Ok(())
}
