//! einkauf-o-matic CLI - Database migrations and member management.
//!
//! # Usage
//!
//! ```bash
//! # Create or update the database schema
//! einkauf-cli migrate
//!
//! # Create a member
//! einkauf-cli member create -u root -p toor
//! ```
//!
//! The database is taken from `EINKAUF_DATABASE_URL` (or `DATABASE_URL`),
//! same as the server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "einkauf-cli")]
#[command(author, version, about = "einkauf-o-matic CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations (application tables and sessions)
    Migrate,
    /// Manage members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },
}

#[derive(Subcommand)]
enum MemberAction {
    /// Create a new member
    Create {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Member { action } => match action {
            MemberAction::Create { username, password } => {
                commands::member::create(&username, password.into()).await?;
            }
        },
    }
    Ok(())
}
