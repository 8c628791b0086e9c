use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hms_duration::OutputFormat;
use hms_duration::commands;
use hms_duration::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "Signed H:MM:SS duration arithmetic")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_enum, help = "Output format (overrides config)")]
    format: Option<OutputFormat>,
    #[arg(long, global = true, help = "Path to config.toml")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a duration
    Show {
        #[arg(allow_hyphen_values = true, help = "H:MM:SS, H:MM or whole seconds")]
        value: String,
    },
    /// Add durations together
    Sum {
        #[arg(allow_hyphen_values = true, help = "Durations to add")]
        values: Vec<String>,
    },
    /// Subtract the second duration from the first
    Diff {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Negate a duration
    Neg {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Compare two durations (greater/less/equal)
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Check that text is strictly in H:MM:SS form
    Validate {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Time of day as a duration
    Clock {
        #[arg(long, help = "RFC 3339 datetime (defaults to now)")]
        at: Option<String>,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_default()?,
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    let output = &config.output;

    match &cli.command {
        Commands::Show { value } => commands::duration::show(output, value)?,
        Commands::Sum { values } => commands::duration::sum(output, values)?,
        Commands::Diff { left, right } => commands::duration::diff(output, left, right)?,
        Commands::Neg { value } => commands::duration::neg(output, value)?,
        Commands::Compare { left, right } => commands::duration::compare(output, left, right)?,
        Commands::Validate { text } => commands::duration::validate(output, text)?,
        Commands::Clock { at } => commands::duration::clock(output, at.as_deref())?,
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
