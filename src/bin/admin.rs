//! CLI administration tool for place-bookings.
//!
//! Works directly against PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show record counts
//! cargo run --bin admin -- db info
//!
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --name Alice --email a@x.com
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # List bookings, optionally for one place
//! cargo run --bin admin -- booking list --place P1
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `DB_*` components (see `place_bookings::config`)

use place_bookings::api::dto::user::CreateUserRequest;
use place_bookings::application::services::{BookingService, UserService};
use place_bookings::config::Config;
use place_bookings::domain::entities::NewUser;
use place_bookings::infrastructure::persistence::{PgBookingRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing place-bookings.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect bookings
    Booking {
        #[command(subcommand)]
        action: BookingAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and record counts
    Info,
}

/// User subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// User name
        #[arg(short, long)]
        name: Option<String>,

        /// User email
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

/// Booking subcommands.
#[derive(Subcommand)]
enum BookingAction {
    /// List bookings
    List {
        /// Only bookings of this place, with user names
        #[arg(short, long)]
        place: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let users = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let bookings = BookingService::new(Arc::new(PgBookingRepository::new(pool.clone())));

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &users, &bookings).await?,
        Commands::User { action } => handle_user_action(action, &users).await?,
        Commands::Booking { action } => handle_booking_action(action, &bookings).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    pool: &PgPool,
    users: &UserService<PgUserRepository>,
    bookings: &BookingService<PgBookingRepository>,
) -> Result<()> {
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

            let users_count = users
                .count_users()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
            let bookings_count = bookings
                .count_bookings()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count bookings: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!(
                "  Bookings:   {}",
                bookings_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(
    action: UserAction,
    users: &UserService<PgUserRepository>,
) -> Result<()> {
    match action {
        UserAction::Create { name, email, yes } => create_user(users, name, email, yes).await,
        UserAction::List => list_users(users).await,
    }
}

/// Creates a user with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for name and email unless given as flags
/// 2. Apply the same presence rules as `POST /users`
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store and print the new id
async fn create_user(
    users: &UserService<PgUserRepository>,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let new_user = NewUser::try_from(CreateUserRequest {
        name: Some(name),
        email: Some(email),
    })
    .map_err(|_| anyhow::anyhow!("Name and email must not be empty"))?;

    println!("  Name:  {}", new_user.name.cyan());
    println!("  Email: {}", new_user.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = users
        .create_user(new_user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID: {}", user.id.bright_yellow());
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID                                    Name                 Email
///   ──────────────────────────────────────────────────────────────────────────
///   6f1c2b9e-3c1d-4d55-9a0e-0c6c8a3f2b11  Alice                a@x.com
/// ```
async fn list_users(users: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let list = users
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if list.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &list {
        println!(
            "  {:<37} {:<20} {}",
            user.id.bright_black(),
            user.name.cyan(),
            user.email
        );
    }

    println!();
    println!("  Total: {}", list.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches booking commands.
async fn handle_booking_action(
    action: BookingAction,
    bookings: &BookingService<PgBookingRepository>,
) -> Result<()> {
    let BookingAction::List { place } = action;

    println!("{}", "📅 Bookings".bright_blue().bold());
    println!();

    // (place, guest, check-in, check-out, party type)
    let rows: Vec<(String, String, String, String, String)> = match place {
        Some(place_id) => bookings
            .list_bookings_for_place(&place_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list bookings: {}", e))?
            .into_iter()
            .map(|b| {
                let guest = b
                    .user
                    .map(|u| u.name)
                    .unwrap_or_else(|| "(unknown user)".to_string());
                (
                    b.place_id,
                    guest,
                    b.check_in.format("%Y-%m-%d %H:%M").to_string(),
                    b.check_out.format("%Y-%m-%d %H:%M").to_string(),
                    b.party_type,
                )
            })
            .collect(),
        None => bookings
            .list_bookings()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list bookings: {}", e))?
            .into_iter()
            .map(|b| {
                (
                    b.place_id,
                    b.user_id,
                    b.check_in.format("%Y-%m-%d %H:%M").to_string(),
                    b.check_out.format("%Y-%m-%d %H:%M").to_string(),
                    b.party_type,
                )
            })
            .collect(),
    };

    if rows.is_empty() {
        println!("{}", "  No bookings found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<12} {:<37} {:<17} {:<17} {}",
        "Place".bright_white().bold(),
        "Guest".bright_white().bold(),
        "Check-in".bright_white().bold(),
        "Check-out".bright_white().bold(),
        "Party".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for (place_id, guest, check_in, check_out, party_type) in &rows {
        println!(
            "  {:<12} {:<37} {:<17} {:<17} {}",
            place_id.cyan(),
            guest,
            check_in.bright_black(),
            check_out.bright_black(),
            party_type
        );
    }

    println!();
    println!("  Total: {}", rows.len().to_string().bright_white().bold());
    println!();

    Ok(())
}
