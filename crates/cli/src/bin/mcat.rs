//! `mcat` binary: per-source dispatch loop over the cat pipeline.

use std::io::{self, Write};
use std::process::ExitCode as ProcessExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use minutils::cat;
use minutils::cli::CatCli;
use minutils::line_reader::LineReader;
use minutils::source::{Source, open_source};

fn main() -> ProcessExitCode {
    init_logging();
    let cli = CatCli::parse();
    match run(cli) {
        Ok(true) => ProcessExitCode::SUCCESS,
        Ok(false) => ProcessExitCode::FAILURE,
        Err(err) => {
            eprintln!("mcat: {err:#}");
            ProcessExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Returns `Ok(true)` when every source was copied cleanly.
fn run(cli: CatCli) -> anyhow::Result<bool> {
    let (options, sources) = cli.into_invocation();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clean = true;

    for name in &sources {
        let Source {
            name: display,
            reader,
        } = match open_source(name) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("mcat: {err}");
                clean = false;
                continue;
            }
        };
        let mut reader = LineReader::new(reader);
        if let Err(err) = cat::write_source(&mut reader, &display, &options, &mut out) {
            eprintln!("mcat: {display}: {err}");
            clean = false;
        }
    }
    out.flush()?;
    Ok(clean)
}
