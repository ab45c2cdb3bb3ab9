use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::FormatRegistry;
use seedcode_tools::{
    describe_registry, format_describe_pretty, format_seed_pretty, parse_assignments,
    FormatsFile, SeedList, SeedReport,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seedcode",
    version,
    about = "Describe, generate, and inspect seed strings"
)]
struct Cli {
    /// Formats file (JSON). A single optionless format is used when absent.
    #[arg(long, global = true)]
    formats: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    format: OutputFormat,
    /// Log debug output to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every registered format and its bit layout.
    Describe,
    /// Generate a new seed.
    Generate {
        /// Format version; the default format when absent.
        #[arg(long)]
        version: Option<u32>,
        /// Option assignment, `id=value`. Repeatable.
        #[arg(long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
        /// Append the seed to this seeds file.
        #[arg(long)]
        seeds_file: Option<PathBuf>,
        /// Label stored next to the seed in the seeds file.
        #[arg(long, requires = "seeds_file")]
        label: Option<String>,
    },
    /// Decode a seed string.
    Inspect {
        /// The seed string.
        seed: String,
    },
    /// Decode every entry of a seeds file.
    List {
        /// Path to the seeds file.
        seeds_file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Serialize)]
struct ListItem {
    seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<SeedReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = load_registry(cli.formats.as_ref())?;
    match cli.command {
        Command::Describe => {
            let reports = describe_registry(&registry);
            match cli.format {
                OutputFormat::Json => print_json(&reports)?,
                OutputFormat::Pretty => print!("{}", format_describe_pretty(&reports)),
            }
        }
        Command::Generate {
            version,
            set,
            seeds_file,
            label,
        } => {
            let format = registry.format(version).context("select format")?;
            let values = parse_assignments(format, set.as_slice())?;
            let seed = registry
                .generate(Some(format.version()), &values)
                .context("generate seed")?;
            if let Some(path) = seeds_file {
                let list = SeedList::new(path);
                if list.append(seed.as_str(), label.as_deref())? {
                    info!(path = %list.path().display(), "saved seed");
                }
            }
            let report = SeedReport::from_seed(&seed);
            match cli.format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => print!("{}", format_seed_pretty(&report)),
            }
        }
        Command::Inspect { seed } => {
            let seed = registry
                .decode(seed.trim())
                .map_err(|err| anyhow!("{}: {err}", err.user_message()))?;
            let report = SeedReport::from_seed(&seed);
            match cli.format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Pretty => print!("{}", format_seed_pretty(&report)),
            }
        }
        Command::List { seeds_file } => {
            let entries = SeedList::new(seeds_file).entries()?;
            debug!(entries = entries.len(), "read seeds file");
            let items: Vec<ListItem> = entries
                .into_iter()
                .map(|entry| match registry.decode(&entry.seed) {
                    Ok(seed) => ListItem {
                        seed: entry.seed,
                        label: entry.label,
                        decoded: Some(SeedReport::from_seed(&seed)),
                        error: None,
                    },
                    Err(err) => ListItem {
                        seed: entry.seed,
                        label: entry.label,
                        decoded: None,
                        error: Some(err.user_message().to_owned()),
                    },
                })
                .collect();
            match cli.format {
                OutputFormat::Json => print_json(&items)?,
                OutputFormat::Pretty => print_list(&items),
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_registry(path: Option<&PathBuf>) -> Result<FormatRegistry> {
    let file = match path {
        Some(path) => FormatsFile::load(path)?,
        None => FormatsFile::builtin()?,
    };
    file.into_registry()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{json}");
    Ok(())
}

fn print_list(items: &[ListItem]) {
    for item in items {
        let label = item
            .label
            .as_deref()
            .map_or_else(String::new, |label| format!(" ({label})"));
        match (&item.decoded, &item.error) {
            (Some(report), _) => println!("{}{label}: version {}", item.seed, report.version),
            (None, Some(error)) => println!("{}{label}: {error}", item.seed),
            (None, None) => println!("{}{label}", item.seed),
        }
    }
}
