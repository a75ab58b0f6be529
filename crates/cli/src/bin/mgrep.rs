//! `mgrep` binary: per-source dispatch loop over the scanning core.

use std::io::{self, Write};
use std::process::ExitCode as ProcessExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use minutils::cli::{GrepCli, GrepInvocation};
use minutils::error::ExitCode;
use minutils::line_reader::LineReader;
use minutils::pattern::PatternSet;
use minutils::report;
use minutils::scanner::scan;
use minutils::source::{Source, open_source};

fn main() -> ProcessExitCode {
    init_logging();
    let cli = GrepCli::parse();
    match run(cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("mgrep: {err:#}");
            ExitCode::Error.into()
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

fn run(cli: GrepCli) -> anyhow::Result<ExitCode> {
    let Some(invocation) = cli.into_invocation() else {
        anyhow::bail!("no pattern specified");
    };
    let GrepInvocation {
        patterns,
        sources,
        options,
    } = invocation;

    // Compiled once, shared read-only across every source.
    let set = PatternSet::build(&patterns, options.case_insensitive)?;
    let multiple_sources = sources.len() > 1;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut any_match = false;
    let mut any_error = false;

    for name in &sources {
        let Source {
            name: display,
            reader,
        } = match open_source(name) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("mgrep: {err}");
                any_error = true;
                continue;
            }
        };
        let mut reader = LineReader::new(reader);
        let result = scan(
            &mut reader,
            &display,
            &set,
            &options,
            |line, line_number, _match_count| {
                report::write_match(&mut out, &display, line, line_number, &options, multiple_sources)
            },
        );
        let summary = match result {
            Ok(summary) => summary,
            Err(err) => {
                eprintln!("mgrep: {display}: {err}");
                any_error = true;
                continue;
            }
        };
        report::write_summary(&mut out, &display, summary.matches, &options, multiple_sources)?;
        if summary.matches > 0 {
            any_match = true;
        }
    }
    out.flush()?;

    Ok(if any_error {
        ExitCode::Error
    } else if any_match {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
