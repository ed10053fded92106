//! Command-line configuration for the terminal front end.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Side length used when `--rows` is not given.
pub const DEFAULT_ROWS: i32 = 50;

/// Largest grid accepted on the command line.
pub const MAX_ROWS: i32 = 500;

/// Where log records go when `RUST_LOG` is set.
pub const DEFAULT_LOG_FILE: &str = "pathgrid.log";

const CONTROLS: &str = "\
Mouse: left places start, then end, then barriers; right clears a cell.
Keys:  space/enter run   c clear   r random barriers   q/esc quit or cancel";

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "pathgrid", version, about = "Watch A* find a shortest path on a grid", after_help = CONTROLS)]
pub struct Config {
    /// Grid side length.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(i32).range(1..=MAX_ROWS as i64)
    )]
    pub rows: i32,

    /// Pause after each search step, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS", default_value = "5", value_parser = parse_millis)]
    pub step_delay: Duration,

    /// Barrier probability for the `r` key, 0.0-1.0.
    #[arg(long, value_name = "P", default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for random barriers. Picked at start-up when absent.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// File that receives log records when `RUST_LOG` is set.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            step_delay: Duration::from_millis(5),
            density: 0.3,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

fn parse_millis(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_millis)
}

fn parse_density(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not in 0.0..=1.0"))
    }
}
