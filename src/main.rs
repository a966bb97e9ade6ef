//! Console front-end for the short-url service.
//!
//! Presentation layer over the library's workflows: it captures field
//! values, calls `submit()`, and renders whatever field errors and outcome
//! the workflow reports. Validation itself lives in the library and is never
//! bypassed here.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! shorturl shorten https://example.com/some/long/path
//!
//! # Shorten with a custom path
//! shorturl shorten https://example.com --path MyLink
//!
//! # Look up statistics for an existing short link
//! shorturl stats MyLink
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required): origin of the short-url service
//! - `RUST_LOG`, `LOG_FORMAT`: logging defaults, see `config`

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use short_url_client::api::HttpShortUrlClient;
use short_url_client::config::Config;
use short_url_client::workflow::{
    CreateForm, CreateShortUrlWorkflow, FetchStatisticsWorkflow, Outcome, StatsForm,
};

/// Console client for the short-url service.
#[derive(Parser)]
#[command(name = "shorturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten (prompted interactively when omitted)
        url: Option<String>,

        /// Claim a custom path instead of a service-assigned one
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show usage statistics for an existing short link
    Stats {
        /// Short link path to look up (prompted interactively when omitted)
        path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let cli = Cli::parse();
    let client = Arc::new(HttpShortUrlClient::from_config(&config));

    match cli.command {
        Commands::Shorten { url, path } => run_shorten(client, &config, url, path).await,
        Commands::Stats { path } => run_stats(client, &config, path).await,
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs the shorten operation and renders its result.
async fn run_shorten(
    client: Arc<HttpShortUrlClient>,
    config: &Config,
    url: Option<String>,
    path: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Shorten a URL".bright_blue().bold());
    println!();

    let original_url = match url {
        Some(url) => url,
        None => Input::new()
            .with_prompt("Original URL")
            .allow_empty(true)
            .interact_text()?,
    };

    if let Some(path) = &path {
        println!("  claiming {}", format!("{}/{}", config.api_base_url, path).cyan());
        println!();
    }

    let form = CreateForm {
        original_url,
        custom_path: path,
    };

    let workflow = CreateShortUrlWorkflow::new(client);
    let outcome = workflow.submit(&form).await;

    let errors = workflow.field_errors();
    if !errors.is_empty() {
        if let Some(message) = errors.original_url {
            println!("{} {}", "✗".red().bold(), message.red());
        }
        if let Some(message) = errors.custom_url_path {
            println!("{} {}", "✗".red().bold(), message.red());
        }
        std::process::exit(1);
    }

    match outcome {
        Outcome::Success(result) => {
            println!("{}", "This is your shortened url".green().bold());
            println!();
            println!("  {}", result.shortened_url.bright_white().underline());
            println!("  {} {}", "original:".dimmed(), result.original_url);
        }
        Outcome::Failure(message) => {
            eprintln!("{} {}", "An error has occurred:".red().bold(), message);
            std::process::exit(1);
        }
        Outcome::Idle => {}
    }

    Ok(())
}

/// Runs the statistics lookup and renders its result.
async fn run_stats(
    client: Arc<HttpShortUrlClient>,
    config: &Config,
    path: Option<String>,
) -> Result<()> {
    println!("{}", "📊 Short link statistics".bright_blue().bold());
    println!();

    let short_url = match path {
        Some(path) => path,
        None => Input::new()
            .with_prompt(format!("{}/", config.api_base_url))
            .allow_empty(true)
            .interact_text()?,
    };

    let form = StatsForm { short_url };

    let workflow = FetchStatisticsWorkflow::new(client);
    let outcome = workflow.submit(&form).await;

    let errors = workflow.field_errors();
    if let Some(message) = errors.short_url {
        println!("{} {}", "✗".red().bold(), message.red());
        std::process::exit(1);
    }

    match outcome {
        Outcome::Success(stats) => {
            println!(
                "{} {}",
                "Statistics of".green().bold(),
                format!("{}/{}", config.api_base_url, form.short_url)
                    .bright_white()
                    .underline()
            );
            println!();
            println!("  {:<14} {}", "Created At:".dimmed(), stats.created_at);
            println!(
                "  {:<14} {}",
                "Custom?:".dimmed(),
                if stats.is_custom { "Yes" } else { "No" }
            );
            println!("  {:<14} {}", "Original Url:".dimmed(), stats.original_url);
            println!("  {:<14} {}", "Short Url:".dimmed(), stats.shortened_url);
            println!("  {:<14} {}", "Visit Count:".dimmed(), stats.visit_count);
        }
        Outcome::Failure(message) => {
            eprintln!("{} {}", "An error has occurred:".red().bold(), message);
            std::process::exit(1);
        }
        Outcome::Idle => {}
    }

    Ok(())
}
