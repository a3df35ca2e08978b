//! Command-line companion for the hum shortener.
//!
//! Works with the same environment configuration as the server, so rules,
//! shortlink base and classification policy behave exactly as they do in
//! production.
//!
//! # Usage
//!
//! ```bash
//! # Encode / decode a resource ID
//! cargo run --bin humctl -- encode 123
//! cargo run --bin humctl -- decode 23
//!
//! # Shortlink for a described resource
//! cargo run --bin humctl -- shortlink 123 --format status
//! cargo run --bin humctl -- shortlink 61 --kind attachment --mime image/png
//!
//! # Where does a short path go?
//! cargo run --bin humctl -- resolve /b/4c2
//! ```
//!
//! # Environment Variables
//!
//! All variables read by the server (see `hum::config`). With `DATABASE_URL`
//! set, `resolve` looks up local content in PostgreSQL; otherwise only
//! redirect rules and `/i/` items can resolve.

use hum::config::{self, Config};
use hum::domain::entities::{Resource, ResourceKind};
use hum::domain::repositories::ResourceRepository;
use hum::infrastructure::persistence::{InMemoryResourceRepository, PgResourceRepository};
use hum::state::AppState;
use hum::utils::base60;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for the hum shortener.
#[derive(Parser)]
#[command(name = "humctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a resource ID as a short code
    Encode { id: u64 },

    /// Decode a short code to a resource ID
    Decode { code: String },

    /// Compute the shortlink of a resource
    Shortlink {
        id: u64,

        /// Resource kind (post, page, attachment, ...)
        #[arg(long, default_value = "post")]
        kind: String,

        /// Content format (aside, status, photo, ...)
        #[arg(long)]
        format: Option<String>,

        /// MIME type, for attachments
        #[arg(long)]
        mime: Option<String>,
    },

    /// Show where a request path redirects
    Resolve { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => {
            println!("{}", base60::encode(id).bright_green().bold());
        }
        Commands::Decode { code } => {
            println!("{}", base60::decode(&code).to_string().bright_green().bold());
        }
        Commands::Shortlink {
            id,
            kind,
            format,
            mime,
        } => {
            let config = config::load_from_env()?;
            shortlink(&config, id, kind, format, mime)?;
        }
        Commands::Resolve { path } => {
            let config = config::load_from_env()?;
            resolve(&config, &path).await?;
        }
    }

    Ok(())
}

fn build_state(config: &Config, repository: Arc<dyn ResourceRepository>) -> AppState {
    AppState::new(
        repository,
        config.hooks(),
        config.shortlink_settings(),
        config.unknown_format_policy,
    )
}

fn shortlink(
    config: &Config,
    id: u64,
    kind: String,
    format: Option<String>,
    mime: Option<String>,
) -> Result<()> {
    if id == 0 {
        anyhow::bail!("resource ID 0 has no shortlink");
    }

    let state = build_state(config, Arc::new(InMemoryResourceRepository::new()));

    let mut resource = Resource::new(id, ResourceKind::from(kind.as_str()), "");
    resource.format = format;
    resource.mime_type = mime;

    match state.shortlinks.shortlink_for(&resource) {
        Ok(link) => {
            println!("{}", link.bright_green().bold());
            println!("  {}", state.shortlinks.link_tag(&link)?.dimmed());
        }
        Err(e) => {
            println!("{} {}", "No shortlink:".red().bold(), e);
        }
    }

    Ok(())
}

async fn resolve(config: &Config, raw_path: &str) -> Result<()> {
    let repository: Arc<dyn ResourceRepository> = match config.database_url {
        Some(ref url) => {
            let pool = PgPool::connect(url)
                .await
                .context("Failed to connect to database")?;
            Arc::new(PgResourceRepository::new(Arc::new(pool)))
        }
        None => {
            println!(
                "{}",
                "DATABASE_URL not set: local content will not resolve".yellow()
            );
            Arc::new(InMemoryResourceRepository::new())
        }
    };
    let state = build_state(config, repository);

    let raw_path = if raw_path.starts_with('/') {
        raw_path.to_string()
    } else {
        format!("/{raw_path}")
    };

    match state.redirect_target(&raw_path).await? {
        Some(url) => println!("{} {}", "301".green().bold(), url),
        None => println!("{}", "404 not found".red().bold()),
    }

    Ok(())
}
