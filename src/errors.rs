//! Error types with rich diagnostics using miette
//!
//! Corpus errors carry the source text and a span so miette can point at the
//! offending JSON.

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span of a single character at a 1-based line/column, as reported by serde_json.
    ///
    /// serde_json reports line 0 for errors that have no position (e.g. from
    /// custom deserializers); those map to the start of the input.
    pub fn span_at(&self, line: usize, column: usize) -> SourceSpan {
        if line == 0 {
            return SourceSpan::new(0.into(), 0);
        }
        let offset = SourceOffset::from_location(&self.source, line, column.max(1));
        let len = usize::from(offset.offset() < self.source.len());
        SourceSpan::new(offset, len)
    }
}

/// Everything that can go wrong while loading, rendering or exporting strokes
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("malformed stroke corpus: {message}")]
    #[diagnostic(
        code(inkstep::corpus::malformed),
        help(
            "the corpus needs a top-level `strokes` array of stroke-groups, \
             each element carrying p0, p1, p2 and p3 as [x, y] pairs"
        )
    )]
    MalformedCorpus {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },

    #[error("stroke corpus {name} contains no elements")]
    #[diagnostic(code(inkstep::corpus::empty))]
    EmptyCorpus { name: String },

    #[error("failed to {action} {path}")]
    #[diagnostic(code(inkstep::io))]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("nothing to render: window ({floor}, {cursor}] selects no elements")]
    #[diagnostic(
        code(inkstep::render::empty_selection),
        help("the cursor must stay above the window floor")
    )]
    EmptySelection { floor: usize, cursor: usize },

    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(inkstep::render::invalid_bounds))]
    InvalidBounds,

    #[error("render sink failed while {stage}")]
    #[diagnostic(code(inkstep::sink::failed))]
    Sink {
        stage: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Build a [`Error::MalformedCorpus`] from a serde_json failure
    pub fn malformed(ctx: &SourceContext, err: &serde_json::Error) -> Self {
        Error::MalformedCorpus {
            message: err.to_string(),
            src: ctx.named_source(),
            span: ctx.span_at(err.line(), err.column()),
        }
    }

    /// Wrap a collaborator failure
    pub fn sink(
        stage: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Sink {
            stage,
            source: source.into(),
        }
    }

    /// True for failures the navigation loop skips instead of aborting on
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Error::EmptySelection { .. })
    }
}
