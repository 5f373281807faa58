//! Page replacement simulator CLI.

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use pagesim::common::config::{DEFAULT_MAX_PAGE, DEFAULT_SEQUENCE_LEN, MAX_FRAMES};
use pagesim::reference::{self, GeneratorConfig};
use pagesim::report::{self, ComparisonReport};
use pagesim::sim::{self, compare_policies, compare_policies_parallel};
use pagesim::{Policy, Result, Workload};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Compare FIFO, LRU and Optimal page replacement",
    long_about = None,
)]
struct Cli {
    /// Number of page frames (1-9).
    #[arg(short = 'f', long)]
    frames: String,

    /// Reference string, e.g. "7,0,1,2,0". Random when omitted.
    #[arg(short = 's', long)]
    sequence: Option<String>,

    /// Length of a generated reference string.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SEQUENCE_LEN, conflicts_with = "sequence")]
    length: usize,

    /// Largest page id in a generated reference string.
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE, conflicts_with = "sequence")]
    max_page: u64,

    /// Seed for a reproducible generated reference string.
    #[arg(long, conflicts_with = "sequence")]
    seed: Option<u64>,

    /// Policy to simulate.
    #[arg(short = 'p', long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Print the report as JSON instead of frame tables.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to this file.
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Run each policy on its own thread.
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    #[value(alias = "opt")]
    Optimal,
    All,
}

impl PolicyArg {
    fn policies(self) -> Vec<Policy> {
        match self {
            PolicyArg::Fifo => vec![Policy::Fifo],
            PolicyArg::Lru => vec![Policy::Lru],
            PolicyArg::Optimal => vec![Policy::Optimal],
            PolicyArg::All => Policy::ALL.to_vec(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    pagesim::logging::init_logger(match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Validate everything before any policy runs.
    let capacity = sim::parse_capacity(&cli.frames, MAX_FRAMES)?;
    let sequence = match &cli.sequence {
        Some(text) => reference::parse_sequence(text)?,
        None => reference::generate(&GeneratorConfig {
            length: cli.length,
            max_page: cli.max_page,
            seed: cli.seed,
        })?,
    };
    let workload = Workload::new(sequence, capacity)?;
    info!(
        "simulating {} references with {} frames",
        workload.sequence().len(),
        workload.capacity()
    );

    let policies = cli.policy.policies();
    let comparison = if cli.parallel {
        compare_policies_parallel(&workload, &policies)
    } else {
        compare_policies(&workload, &policies)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json || cli.output.is_some() {
        let report = ComparisonReport::new(&workload, &comparison);
        if let Some(path) = &cli.output {
            report.save(path)?;
            info!("wrote report to {}", path);
        }
        if cli.json {
            report.write_to(&mut out)?;
            writeln!(out)?;
        }
    }

    if !cli.json {
        write!(out, "{}", report::render_comparison(&workload, &comparison))?;
    }
    out.flush()?;
    Ok(())
}
