use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::digits::digits_of;
use crate::program::to_infix;
use crate::search::ExpressionSearch;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Arithmogram - find arithmetic expressions hidden in the digits of a number
#[derive(Parser, Debug)]
#[command(name = "arithmogram")]
#[command(
    about = "Enumerate digit-order-preserving arithmetic expressions that evaluate to a target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value the expression must equal
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Source integer whose decimal digits feed the expression
    #[arg(default_value_t = 114_514)]
    pub source: u64,

    /// Stop at the first matching expression instead of draining the search
    #[arg(short, long)]
    pub digest: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let digits = digits_of(args.source);
    let search = ExpressionSearch::new(&digits, args.target)
        .context("Invalid digit sequence")?;

    info!(
        "Searching the digits of {} for expressions equal to {}",
        args.source, args.target
    );
    let started = Instant::now();

    if args.digest {
        match search.first() {
            Some(program) => {
                let rendered =
                    to_infix(&digits, &program).context("Failed to render matching program")?;
                println!("{} = {}", args.target, rendered);
            }
            None => {
                warn!("Search exhausted without a match");
                println!("No result found");
            }
        }
    } else {
        let mut rendered = BTreeSet::new();
        for program in search.matches() {
            rendered
                .insert(to_infix(&digits, &program).context("Failed to render matching program")?);
        }
        for expr in &rendered {
            println!("{} = {}", args.target, expr);
        }
        println!("{} results found", rendered.len());
    }

    println!("Elapsed: {:.6} seconds", started.elapsed().as_secs_f64());
    Ok(())
}
