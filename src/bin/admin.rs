//! CLI administration tool for resource-api.
//!
//! Works directly against the PostgreSQL database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List users and books
//! cargo run --bin admin -- user list
//! cargo run --bin admin -- book list
//!
//! # Delete a user (asks for confirmation unless --yes)
//! cargo run --bin admin -- user delete u_AbCdEfGh
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or the `DB_*` components, as for the server

use resource_api::application::services::{BookService, UserService};
use resource_api::config::{Config, mask_connection_string};
use resource_api::infrastructure::persistence::{self, PgBookRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing resource-api data.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage books
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Delete a user by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum BookAction {
    /// List all books
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = persistence::connect(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Book { action } => handle_book_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    pool.close().await;

    Ok(())
}

fn user_service(pool: &PgPool) -> UserService {
    UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))))
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = user_service(pool);

    match action {
        UserAction::List => list_users(&service).await,
        UserAction::Delete { id, yes } => delete_user(&service, &id, yes).await,
    }
}

/// Prints all users ordered by creation time.
///
/// ```text
/// 👤 Users
///
///   Id           Name                     Age   Created
///   ────────────────────────────────────────────────────────────
///   u_AbCdEfGh   taro                     20    2026-01-15 10:30
/// ```
async fn list_users(service: &UserService) -> Result<()> {
    println!("{}", "👤 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<24} {:<5} {}",
        "Id".bright_white().bold(),
        "Name".bright_white().bold(),
        "Age".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for user in &users {
        println!(
            "  {:<12} {:<24} {:<5} {}",
            user.id.bright_black(),
            user.name.cyan(),
            user.age,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn delete_user(service: &UserService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    let user = service
        .get_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", id, e))?;

    println!("  Name: {}", user.name.cyan());
    println!("  Id:   {}", user.id.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_book_action(action: BookAction, pool: &PgPool) -> Result<()> {
    let service = BookService::new(Arc::new(PgBookRepository::new(Arc::new(pool.clone()))));

    match action {
        BookAction::List => list_books(&service).await,
    }
}

async fn list_books(service: &BookService) -> Result<()> {
    println!("{}", "📚 Books".bright_blue().bold());
    println!();

    let books = service
        .list_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<32} {}",
        "Id".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for book in &books {
        println!(
            "  {:<12} {:<32} {}",
            book.id.bright_black(),
            book.title.cyan(),
            book.author
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();

            if let Some(ref url) = config.database_url {
                println!("  URL:     {}", mask_connection_string(url).bright_black());
            }

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .unwrap_or(0);
            let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  Version: {}", version.cyan());
            println!("  Users:   {}", users.to_string().bright_white());
            println!("  Books:   {}", books.to_string().bright_white());
            println!();
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            persistence::migrate(pool).await?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
