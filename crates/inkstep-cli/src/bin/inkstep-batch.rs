//! inkstep-batch - export every step of a stroke corpus, one Enter at a time.

use clap::Parser;
use inkstep_cli::{Args, init_tracing, run_batch};

fn main() -> miette::Result<()> {
    init_tracing();
    run_batch(Args::parse())
}
