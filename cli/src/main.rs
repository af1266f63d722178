//! Bambly maintenance CLI: seed demo accounts, bulk-remove stale users.
//!
//! Exits non-zero only on connection/query errors; "nothing to do" is a
//! successful run.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

#[derive(Parser, Debug)]
#[command(name = "bambly-admin", about = "Bambly dashboard maintenance CLI")]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the demo accounts if absent and print their credentials.
    SeedUsers,
    /// Delete every user whose email ends in the given domain.
    RemoveUsers {
        #[arg(long)]
        email_domain: String,
    },
}

/// Demo accounts: (name, email, password, role, department).
const DEMO_USERS: [(&str, &str, &str, &str, &str); 3] = [
    ("Admin User", "admin@bambly.ai", "admin123", "admin", "Management"),
    ("Marketing Manager", "manager@bambly.ai", "manager123", "manager", "Marketing"),
    ("Marketing Analyst", "analyst@bambly.ai", "analyst123", "viewer", "Analytics"),
];

/// Normalize a bare or @-prefixed domain into an email suffix.
fn email_suffix(domain: &str) -> String {
    let trimmed = domain.trim().trim_start_matches('@');
    format!("@{trimmed}")
}

/// SQL LIKE pattern matching every address under the domain.
fn like_pattern(domain: &str) -> String {
    format!("%{}", email_suffix(domain))
}

/// One line of the credentials table, role column padded for alignment.
fn credentials_row(role: &str, email: &str, password: &str) -> String {
    format!("{:<10} | {email} | {password}", role.to_uppercase())
}

fn hash_password(plain: &str) -> Result<String, CliError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CliError::Hash(e.to_string()))
}

async fn seed_users(pool: &PgPool) -> Result<(), CliError> {
    for (name, email, password, role, department) in DEMO_USERS {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;

        if exists {
            println!("user {email} already exists, skipping");
            continue;
        }

        let hash = hash_password(password)?;
        sqlx::query(
            "INSERT INTO users (name, email, password_hash, role, department)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(email)
        .bind(&hash)
        .bind(role)
        .bind(department)
        .execute(pool)
        .await?;

        println!("created user {email}");
    }

    println!("\nLogin Credentials:");
    println!("{}", "=".repeat(55));
    for (_, email, password, role, _) in DEMO_USERS {
        println!("{}", credentials_row(role, email, password));
    }
    println!("{}", "=".repeat(55));

    Ok(())
}

async fn remove_users(pool: &PgPool, email_domain: &str) -> Result<(), CliError> {
    let result = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(like_pattern(email_domain))
        .execute(pool)
        .await?;

    println!(
        "deleted {} user(s) with {} email",
        result.rows_affected(),
        email_suffix(email_domain)
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&cli.database_url)
        .await?;

    match cli.command {
        Command::SeedUsers => seed_users(&pool).await,
        Command::RemoveUsers { email_domain } => remove_users(&pool, &email_domain).await,
    }
}
