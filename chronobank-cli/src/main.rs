//! ChronoBank time codec CLI

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use chronobank_cli::args::Args;
use chronobank_cli::logging::init_tracing;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);
    debug!(command = ?args.command, json = args.json, "Starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    chronobank_cli::run(&args, &mut out)
}
