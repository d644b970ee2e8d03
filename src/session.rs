//! Navigation plus rendering: one step of the interactive viewer.
//!
//! A [`Session`] commits each transition to its [`Navigator`] first, then
//! renders the new window and hands the document to its sink. The status text
//! reflects the last completed render.

use crate::corpus::Corpus;
use crate::errors::Result;
use crate::geometry::BoundingBox;
use crate::log::{debug, info};
use crate::navigation::{Navigator, Transition};
use crate::render::{RenderOptions, render_window};
use crate::sink::RenderSink;

/// What the last render did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderOutcome {
    /// A document covering `elements` elements went to the sink
    Rendered {
        elements: usize,
        bounds: BoundingBox,
    },
    /// The window selected nothing; no file was written
    Skipped,
}

pub struct Session<'c, S: RenderSink> {
    corpus: &'c Corpus,
    navigator: Navigator,
    sink: S,
    options: RenderOptions,
    last: Option<RenderOutcome>,
}

impl<'c, S: RenderSink> Session<'c, S> {
    /// Start at the first element. Nothing is rendered until [`Session::render`].
    pub fn new(corpus: &'c Corpus, sink: S, options: RenderOptions) -> Result<Self> {
        let navigator = Navigator::new(corpus)?;
        info!(
            corpus = corpus.name(),
            total = corpus.total_elements(),
            "session started"
        );
        Ok(Self::with_navigator(corpus, navigator, sink, options))
    }

    pub(crate) fn with_navigator(
        corpus: &'c Corpus,
        navigator: Navigator,
        sink: S,
        options: RenderOptions,
    ) -> Self {
        Self {
            corpus,
            navigator,
            sink,
            options,
            last: None,
        }
    }

    /// Render the current window and send it to the sink.
    ///
    /// An empty window is skipped rather than reported; any other failure,
    /// including the sink's, is returned.
    pub fn render(&mut self) -> Result<RenderOutcome> {
        let window = self.navigator.window();
        let outcome = match render_window(self.corpus, &window, &self.options) {
            Ok(document) => {
                self.sink.write(&document)?;
                RenderOutcome::Rendered {
                    elements: document.element_count(),
                    bounds: document.bounds(),
                }
            }
            Err(e) if e.is_empty_selection() => {
                debug!(cursor = window.cursor, "skipped empty window");
                RenderOutcome::Skipped
            }
            Err(e) => return Err(e),
        };
        self.last = Some(outcome);
        Ok(outcome)
    }

    /// Commit a transition, then re-render.
    pub fn apply(&mut self, transition: Transition) -> Result<RenderOutcome> {
        self.navigator.apply(transition);
        self.render()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn last_outcome(&self) -> Option<RenderOutcome> {
        self.last
    }

    /// `Element 4/5 | Full | Stroke 2/2`, plus a note when the last render was skipped
    pub fn status_text(&self) -> String {
        let mut status = self.navigator.status_text();
        if let Some((group, _)) = self.corpus.locate(self.navigator.cursor()) {
            status.push_str(&format!(
                " | Stroke {}/{}",
                group + 1,
                self.corpus.groups().len()
            ));
        }
        if self.last == Some(RenderOutcome::Skipped) {
            status.push_str(" | nothing to render");
        }
        status
    }
}
