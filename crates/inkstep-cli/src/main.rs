//! inkstep - step through a stroke corpus in the terminal.

use clap::Parser;
use inkstep_cli::{Args, init_tracing, run_interactive};

fn main() -> miette::Result<()> {
    init_tracing();
    run_interactive(Args::parse())
}
