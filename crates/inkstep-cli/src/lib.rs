//! Terminal front ends for inkstep.
//!
//! - `inkstep`: full-screen viewer, stepping with the arrow keys
//! - `inkstep-batch`: exports every prefix in order, prompting on stdin

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, BufRead, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use inkstep::{Corpus, Error, Prompt, RenderOptions, export_steps};
use inkstep_raster::FileSink;
use miette::IntoDiagnostic;

use app::App;

/// Key help shown before the viewer starts and in its footer
pub const KEY_HELP: &str = "← previous element | → next element | s toggle window | q quit";

#[derive(Parser, Debug)]
#[command(version, about = "Step through a stroke corpus, writing SVG and PNG at every step")]
pub struct Args {
    /// Stroke corpus (JSON with a top-level `strokes` array)
    pub input: Utf8PathBuf,

    /// SVG output path; the PNG is written next to it
    pub output: Utf8PathBuf,
}

/// Log to stderr, filtered by `RUST_LOG`. Silent when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn print_saved(sink: &FileSink) {
    println!("Final SVG saved as '{}'", sink.svg_path());
    println!("Final PNG saved as '{}'", sink.png_path());
}

/// Load the corpus, then run the full-screen viewer until `q`.
pub fn run_interactive(args: Args) -> miette::Result<()> {
    let corpus = Corpus::load(&args.input)?;
    println!("Total number of elements: {}", corpus.total_elements());
    println!("{KEY_HELP}");

    let mut app = App::new(&corpus, FileSink::new(args.output), RenderOptions::default())?;
    event::run_event_loop(&mut app)?;

    print_saved(app.session.sink());
    Ok(())
}

/// Read one reply line from `input`. End of input counts as `q`.
pub fn read_reply(input: &mut impl BufRead) -> inkstep::Result<Prompt> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|source| Error::Io {
        action: "read",
        path: "<stdin>".to_string(),
        source,
    })?;
    if read == 0 {
        return Ok(Prompt::Abort);
    }
    Ok(Prompt::from_reply(&line))
}

/// Load the corpus, then export each prefix, pausing for Enter or `q`.
pub fn run_batch(args: Args) -> miette::Result<()> {
    let corpus = Corpus::load(&args.input)?;
    println!("Total number of elements: {}", corpus.total_elements());

    let mut sink = FileSink::new(args.output);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    export_steps(&corpus, &mut sink, &RenderOptions::default(), |cursor, total| {
        print!(
            "Element {cursor}/{total} added. Press Enter to add next element, or 'q' to quit: "
        );
        io::stdout().flush().map_err(|source| Error::Io {
            action: "write",
            path: "<stdout>".to_string(),
            source,
        })?;
        read_reply(&mut input)
    })?;

    print_saved(&sink);
    io::stdout().flush().into_diagnostic()?;
    Ok(())
}
