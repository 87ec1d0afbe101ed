//! sysmc CLI

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sysmc_core::types::SignMode;
use sysmc_toys::combine::{combine, CombineOptions, DEFAULT_TOYS};

#[derive(Parser)]
#[command(name = "sysmc")]
#[command(about = "Monte Carlo combination of correlated and uncorrelated uncertainties")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error).
    /// Per-component diagnostics are emitted at debug.
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine dataset uncertainties via toy Monte Carlo
    Combine {
        /// Input JSON (dataset -> component -> {value, corr, uncorr})
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the combination artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Toys to generate per dataset
        #[arg(short = 't', long, default_value_t = DEFAULT_TOYS)]
        toys: usize,

        /// Correlated-source selector (m1s, p1s, both)
        #[arg(long, default_value = "both")]
        corr_mode: String,

        /// Uncorrelated-source selector (m1s, p1s, both)
        #[arg(long, default_value = "both")]
        uncorr_mode: String,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Combine { input, output, toys, corr_mode, uncorr_mode, seed } => {
            cmd_combine(&input, output.as_ref(), toys, &corr_mode, &uncorr_mode, seed)
        }
        Commands::Version => {
            println!("sysmc {}", sysmc_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_combine(
    input: &PathBuf,
    output: Option<&PathBuf>,
    toys: usize,
    corr_mode: &str,
    uncorr_mode: &str,
    seed: u64,
) -> Result<()> {
    // Selector validation happens before any input is read or toy drawn.
    let corr_mode = SignMode::from_str(corr_mode)?;
    let uncorr_mode = SignMode::from_str(uncorr_mode)?;
    if toys == 0 {
        anyhow::bail!("toys must be > 0");
    }

    let text = std::fs::read_to_string(input)?;
    let datasets = sysmc_core::input::parse_datasets(&text)?;
    tracing::info!(n_datasets = datasets.len(), toys, "input loaded");

    let opts = CombineOptions { n_toys: toys, corr_mode, uncorr_mode, seed };
    let artifact = combine(&datasets, &opts)?;

    write_json(output, serde_json::to_value(artifact)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
