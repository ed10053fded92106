use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use pathgrid_term::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    init_logging(&config.log_file)?;
    pathgrid_term::run(&config)
}

/// Send log records to `path`, but only when `RUST_LOG` asks for them. The
/// terminal itself is taken over by the grid.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    log_builder(File::create(path)?).init();
    Ok(())
}

fn log_builder(file: File) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)));
    builder
}
