//! ProspectLens CLI — the main entry point.
//!
//! Commands:
//! - `onboard`      — Create the config file with defaults
//! - `config`       — Validate, show or locate the configuration
//! - `extract`      — List the insights found in a profile
//! - `score`        — Compute the personalization score
//! - `case-studies` — Search and pick case studies from a fetch result
//! - `compose`      — Build the generation request body
//! - `value-props`  — List a value-proposition catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "prospectlens",
    about = "ProspectLens — profile insights for personalized outreach",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of ~/.prospectlens/config.toml
    #[arg(short, long, global = true, env = "PROSPECTLENS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration file with defaults
    Onboard,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Extract insights from a profile JSON file
    Extract {
        /// Path to the profile record
        profile: PathBuf,

        /// Print the insights as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the personalization score
    Score {
        /// Path to the profile record
        profile: PathBuf,

        /// Flip the selection of an insight (e.g. `insight-3` or `3`)
        #[arg(short, long = "toggle")]
        toggles: Vec<String>,

        /// Count a chosen value proposition
        #[arg(long)]
        value_prop: bool,

        /// Additional free-text context
        #[arg(long)]
        context: Option<String>,
    },

    /// Search a case-study fetch result
    CaseStudies {
        /// Path to a `{ "case_studies": [...] }` file
        file: PathBuf,

        /// Substring filter over title, excerpt, categories and keywords
        #[arg(short, long)]
        query: Option<String>,

        /// Mark a case study as selected, by title
        #[arg(short, long = "select")]
        selections: Vec<String>,
    },

    /// Build the generation request for a profile
    Compose(commands::compose::ComposeArgs),

    /// List a value-proposition catalog without duplicates
    ValueProps {
        /// Path to the catalog JSON array
        catalog: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Check the configuration for errors
    Validate,
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Onboard => commands::onboard::run(config_path).await?,
        Commands::Config { action } => match action {
            ConfigAction::Validate => commands::config_cmd::validate(config_path).await?,
            ConfigAction::Show => commands::config_cmd::show(config_path).await?,
            ConfigAction::Path => commands::config_cmd::path(config_path).await?,
        },
        Commands::Extract { profile, json } => {
            commands::extract::run(config_path, &profile, json).await?
        }
        Commands::Score {
            profile,
            toggles,
            value_prop,
            context,
        } => {
            commands::score::run(config_path, &profile, &toggles, value_prop, context.as_deref())
                .await?
        }
        Commands::CaseStudies {
            file,
            query,
            selections,
        } => commands::case_studies::run(&file, query.as_deref(), &selections).await?,
        Commands::Compose(args) => commands::compose::run(config_path, args).await?,
        Commands::ValueProps { catalog } => commands::value_props::run(&catalog).await?,
    }

    Ok(())
}
