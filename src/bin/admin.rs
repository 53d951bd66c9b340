//! CLI administration tool for url-shortcuts.
//!
//! Manages shortcuts directly in the database and generates secrets, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a shortcut (slug generated when omitted)
//! cargo run --bin admin -- shortcut create --url https://example.com --slug docs
//!
//! # Inspect a shortcut without counting a use
//! cargo run --bin admin -- shortcut show docs
//!
//! # Delete a shortcut
//! cargo run --bin admin -- shortcut delete docs
//!
//! # Preview generated slugs
//! cargo run --bin admin -- slug generate -n 5
//!
//! # Generate a value for API_KEY
//! cargo run --bin admin -- key generate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` parts: required for `shortcut` and `db` commands

use url_shortcuts::application::services::ShortcutService;
use url_shortcuts::config::{Config, mask_connection_string};
use url_shortcuts::domain::entities::{NewShortcut, Shortcut};
use url_shortcuts::error::AppError;
use url_shortcuts::infrastructure::persistence::PgShortcutRepository;
use url_shortcuts::utils::key_generator::generate_api_key;
use url_shortcuts::utils::slug_generator::generate_slug;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortcuts.
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
    /// Manage shortcuts
    Shortcut {
        #[command(subcommand)]
        action: ShortcutAction,
    },

    /// Slug utilities
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },

    /// API key utilities
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ShortcutAction {
    /// Create a new shortcut
    Create {
        /// Destination URL (prompted when omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Custom slug (generated when omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a shortcut and its use count
    Show { slug: String },

    /// Delete a shortcut
    Delete {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SlugAction {
    /// Print randomly generated slugs
    Generate {
        /// How many slugs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Print a fresh random API key
    Generate,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shortcut { action } => {
            let pool = connect().await?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            handle_shortcut_action(action, pool).await?
        }
        Commands::Slug { action } => handle_slug_action(action),
        Commands::Key { action } => handle_key_action(action)?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })
}

/// Dispatches shortcut management commands.
async fn handle_shortcut_action(action: ShortcutAction, pool: PgPool) -> Result<()> {
    let service = ShortcutService::new(Arc::new(PgShortcutRepository::new(Arc::new(pool))));

    match action {
        ShortcutAction::Create { url, slug, yes } => create_shortcut(&service, url, slug, yes).await,
        ShortcutAction::Show { slug } => show_shortcut(&service, &slug).await,
        ShortcutAction::Delete { slug, yes } => delete_shortcut(&service, &slug, yes).await,
    }
}

/// Creates a shortcut with the same rules as the HTTP API.
///
/// Validation failures are listed one per line and the command exits with an error.
async fn create_shortcut(
    service: &ShortcutService<PgShortcutRepository>,
    url: Option<String>,
    slug: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Shortcut".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Destination URL").interact_text()?,
    };

    println!("  URL:  {}", url.cyan());
    println!(
        "  Slug: {}",
        slug.as_deref().unwrap_or("(generated)").bright_yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this shortcut?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let shortcut = service
        .create(NewShortcut::new(url, slug))
        .await
        .map_err(report)?;

    println!("{}", "✅ Shortcut created".green().bold());
    println!();
    print_shortcut(&shortcut);

    Ok(())
}

async fn show_shortcut(service: &ShortcutService<PgShortcutRepository>, slug: &str) -> Result<()> {
    let shortcut = service.get(slug).await.map_err(report)?;
    print_shortcut(&shortcut);
    Ok(())
}

/// Deletes a shortcut after confirmation (default: No).
async fn delete_shortcut(
    service: &ShortcutService<PgShortcutRepository>,
    slug: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Shortcut".bright_blue().bold());
    println!();

    let shortcut = service.get(slug).await.map_err(report)?;
    print_shortcut(&shortcut);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this shortcut?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service.delete(slug).await.map_err(report)?;

    println!(
        "{} {} ({} uses)",
        "✅ Deleted".green().bold(),
        deleted.slug.cyan(),
        deleted.uses
    );

    Ok(())
}

fn print_shortcut(shortcut: &Shortcut) {
    println!("  Slug: {}", shortcut.slug.cyan());
    println!("  URL:  {}", shortcut.url.bright_white());
    println!("  Uses: {}", shortcut.uses.to_string().bright_green().bold());
    println!();
}

/// Prints the client-facing parts of an error and turns it into a CLI error.
fn report(err: AppError) -> anyhow::Error {
    let body = err.to_error_body();

    eprintln!("{} {}", format!("{}:", body.error).red().bold(), body.message);

    if let Some(fields) = body.details.as_object() {
        for (field, value) in fields {
            match value.as_array() {
                Some(violations) => {
                    for violation in violations {
                        let message = violation["message"].as_str().unwrap_or_default();
                        eprintln!("  {} {}", format!("{field}:").yellow(), message);
                    }
                }
                None => eprintln!("  {} {}", format!("{field}:").yellow(), value),
            }
        }
    }

    anyhow::anyhow!(err)
}

fn handle_slug_action(action: SlugAction) {
    match action {
        SlugAction::Generate { count } => {
            for _ in 0..count {
                println!("{}", generate_slug());
            }
        }
    }
}

fn handle_key_action(action: KeyAction) -> Result<()> {
    match action {
        KeyAction::Generate => {
            let key = generate_api_key()
                .map_err(|e| anyhow::anyhow!("Failed to generate random bytes: {e}"))?;

            println!("{}", key.bright_yellow().bold());
            eprintln!();
            eprintln!(
                "{}",
                "Set it as API_KEY and send it as: Authorization: Bearer <key>".bright_black()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = connect().await?;
            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            let count = PgShortcutRepository::new(Arc::new(pool))
                .count()
                .await
                .map_err(|e| anyhow::anyhow!(e))
                .context("Shortcuts table missing or unreadable; start the server once to apply migrations")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Shortcuts: {}", count.to_string().bright_white());
        }
    }

    Ok(())
}
