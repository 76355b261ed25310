//! CLI administration tool for tinylink.
//!
//! Manages links, shows statistics, and performs database checks without
//! going through the HTTP API. Every link operation goes through the same
//! [`LinkService`] the server uses, so validation and conflict rules match.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- link list
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- link create https://example.com --code MyLink1
//!
//! # Delete a link without confirmation
//! cargo run --bin admin -- link delete MyLink1 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` parts): PostgreSQL connection

use tinylink::application::services::LinkService;
use tinylink::config;
use tinylink::domain::entities::Link;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a new short link
    Create {
        /// Target URL
        url: String,

        /// Custom short code (6-8 letters or digits, generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a single link
    Show { code: String },

    /// Delete a link
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

type PgLinkService = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::Config::from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = connect_pool(&config, database_url).await?;
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &PgLinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await?,
        LinkAction::Create { url, code } => create_link(service, url, code).await?,
        LinkAction::Show { code } => show_link(service, &code).await?,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await?,
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code      Clicks  Created           URL
///   ──────────────────────────────────────────────────────────────
///   Ab3dE9    12      2025-01-15 10:30  https://example.com/a
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<17} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn create_link(service: &PgLinkService, url: String, code: Option<String>) -> Result<()> {
    println!("{}", "✨ Create Link".bright_blue().bold());
    println!();

    let link = service
        .create_link(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link);

    Ok(())
}

async fn show_link(service: &PgLinkService, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link);

    Ok(())
}

/// Deletes a link after confirmation (default: No) unless `--yes` is given.
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

fn print_link(link: &Link) {
    let last_click = link
        .last_clicked_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:       {}", link.code.cyan().bold());
    println!("  URL:        {}", link.url.bright_white());
    println!("  Clicks:     {}", link.clicks.to_string().bright_green());
    println!("  Last click: {}", last_click.bright_black());
    println!(
        "  Created:    {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays link and click totals.
async fn handle_stats(service: &PgLinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load links: {}", e))?;

    let clicks: i64 = links.iter().map(|l| l.clicks).sum();
    let clicked = links.iter().filter(|l| l.was_clicked()).count();

    println!(
        "  Links:         {}",
        links.len().to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks.to_string().bright_green().bold()
    );
    println!(
        "  Clicked links: {}",
        clicked.to_string().bright_green().bold()
    );

    if let Some(top) = links.iter().max_by_key(|l| l.clicks).filter(|l| l.clicks > 0) {
        println!(
            "  Most clicked:  {} ({})",
            top.code.cyan(),
            top.clicks.to_string().bright_white()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &PgLinkService, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let repository = service.repository();
            let now = repository
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Server time: {}", now.to_rfc3339().bright_white());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let status = service
                .store_status()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", status.link_count.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
