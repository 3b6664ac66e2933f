use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use statsum::{
    config::Config,
    data::{self, Value},
    sampler::Sampler,
    summary::{Report, summarize},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a synthetic normal sample
    Generate {
        /// Overrides the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarize the given values ("NA" marks a missing entry)
    #[command(allow_negative_numbers = true)]
    Values {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    log::info!("{cfg:#?}");

    let data = match args.command {
        Command::Generate { seed } => {
            let mut sample_cfg = cfg.sample.clone();
            if seed.is_some() {
                sample_cfg.seed = seed;
            }
            let mut sampler = Sampler::new(sample_cfg).context("failed to construct sampler")?;
            sampler.draw().context("failed to draw sample")?
        }
        Command::Values { values } => {
            data::parse_values(&values).context("failed to parse values")?
        }
    };

    print_summary(&data, cfg.output.precision);

    Ok(())
}

fn print_summary(data: &[Value], precision: usize) {
    let n_missing = data.iter().filter(|&&val| data::is_missing(val)).count();
    log::info!("summarizing {} values ({n_missing} missing)", data.len());

    let summary = summarize(data);
    if summary.is_none() {
        log::info!("mean is not strictly positive, no summary produced");
    }

    println!("{}", Report { summary, precision });
}
