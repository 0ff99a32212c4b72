use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scope_mapper::{ScopeMapperConfig, ScopesAttributesProcessor};
use scope_mapper_sdk::PrincipalAttributes;
use tracing_subscriber::EnvFilter;

/// Scope Mapper - derive authorization policies from token scopes
#[derive(Parser)]
#[command(name = "scope-mapper-cli")]
#[command(about = "Scope Mapper - derive authorization policies from token scopes")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML, `scope_mapper` section)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the policies derived from a decoded claims document as a JSON array
    Map {
        /// Claims JSON file; reads stdin when omitted or "-"
        #[arg(long)]
        claims: Option<PathBuf>,
    },
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    // Configuration errors abort here, before any claims are read.
    let config = ScopeMapperConfig::load(cli.config.as_deref())
        .context("failed to load scope mapper configuration")?;
    let processor = ScopesAttributesProcessor::from_config(&config)
        .context("failed to initialize scope mapper")?;

    match cli.command {
        Commands::Map { claims } => {
            let claims = read_claims(claims.as_deref())?;
            let policies = map_claims(&processor, &claims);
            println!("{}", serde_json::to_string(&policies)?);
            Ok(())
        }
        Commands::Check => {
            tracing::info!("Checking configuration...");
            println!(
                "Configuration is valid (mapper_type: {})",
                processor.mapper_type()
            );
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn read_claims(path: Option<&Path>) -> Result<serde_json::Value> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read claims file: {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read claims from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("claims are not valid JSON")
}

fn map_claims(processor: &ScopesAttributesProcessor, claims: &serde_json::Value) -> Vec<String> {
    let mut attributes = PrincipalAttributes::new();
    processor.process_attributes(claims, &mut attributes);
    attributes.into_policies()
}
