use anyhow::Result;
use clap::Parser;

use naclens::cli::{Cli, Commands};
use naclens::commands::{analyze, init, simulate, sweep};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            scenario,
            data_dir,
            format,
            vendors,
        } => analyze::analyze(analyze::AnalyzeConfig {
            scenario,
            data_dir,
            format: format.into(),
            vendors,
        }),
        Commands::Sweep {
            scenario,
            vendor,
            data_dir,
            format,
            step,
        } => sweep::sweep(sweep::SweepConfig {
            scenario,
            data_dir,
            vendor,
            format: format.into(),
            step_pct: step,
        }),
        Commands::Simulate {
            scenario,
            vendor,
            data_dir,
            format,
            trials,
            seed,
        } => simulate::simulate(simulate::SimulateConfig {
            scenario,
            data_dir,
            vendor,
            format: format.into(),
            trials,
            seed,
        }),
        Commands::Init { force } => init::init_workspace(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
