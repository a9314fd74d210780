//! mdindex: number the headings of markdown documents in place.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdindex::cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let result = cli::run(args, &mut io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    ExitCode::from(cli::exit_status(&result))
}
