//! Linear export: every prefix of the corpus, one after another.
//!
//! The batch driver has no offset window and no backward step. It renders
//! `cursor = 1..=total` in full mode and asks the caller whether to go on
//! after each document.

use crate::corpus::Corpus;
use crate::errors::{Error, Result};
use crate::log::info;
use crate::render::{RenderOptions, render_window};
use crate::sink::RenderSink;
use crate::window::Window;

/// Answer to the between-steps prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Continue,
    Abort,
}

impl Prompt {
    /// `q` (any case, surrounding whitespace ignored) aborts; anything else continues.
    pub fn from_reply(reply: &str) -> Self {
        if reply.trim().eq_ignore_ascii_case("q") {
            Prompt::Abort
        } else {
            Prompt::Continue
        }
    }
}

/// Export every full-mode prefix to `sink`, calling `pause(cursor, total)` after each.
///
/// Returns the number of documents written. The last step is followed by a
/// pause too, so the caller can show it before exiting.
pub fn export_steps<S, F>(
    corpus: &Corpus,
    sink: &mut S,
    options: &RenderOptions,
    mut pause: F,
) -> Result<usize>
where
    S: RenderSink + ?Sized,
    F: FnMut(usize, usize) -> Result<Prompt>,
{
    let total = corpus.total_elements();
    if total == 0 {
        return Err(Error::EmptyCorpus {
            name: corpus.name().to_string(),
        });
    }

    let mut written = 0;
    for cursor in 1..=total {
        let document = render_window(corpus, &Window::full(cursor), options)?;
        sink.write(&document)?;
        written += 1;
        if pause(cursor, total)? == Prompt::Abort {
            info!(cursor, total, "batch export aborted");
            break;
        }
    }
    Ok(written)
}
