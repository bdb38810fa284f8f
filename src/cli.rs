use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "naclens")]
#[command(about = "NAC vendor cost/benefit and risk analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and compare vendors under a scenario
    Analyze {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Dataset directory
        #[arg(long, default_value = "data", env = "NACLENS_DATA_DIR")]
        data_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Vendors to analyze (overrides the scenario's list)
        #[arg(long, value_delimiter = ',')]
        vendors: Option<Vec<String>>,
    },

    /// One-variable-at-a-time payback sensitivity sweep
    Sweep {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Vendor to sweep
        #[arg(long)]
        vendor: String,

        /// Dataset directory
        #[arg(long, default_value = "data", env = "NACLENS_DATA_DIR")]
        data_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Sweep step in percent
        #[arg(long, default_value = "10")]
        step: i32,
    },

    /// Monte Carlo simulation of the payback distribution
    Simulate {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Vendor to simulate
        #[arg(long)]
        vendor: String,

        /// Dataset directory
        #[arg(long, default_value = "data", env = "NACLENS_DATA_DIR")]
        data_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Number of trials
        #[arg(long, default_value = "1000")]
        trials: u32,

        /// RNG seed; the same seed always reproduces the same distribution
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Write a starter scenario and dataset directory
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}
