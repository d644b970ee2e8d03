//! Stroke corpus: stroke-groups of cubic Bézier elements, loaded once per session.

use camino::Utf8Path;
use glam::DVec2;
use serde::Deserialize;

use crate::errors::{Error, Result, SourceContext};
use crate::log::debug;

/// One cubic Bézier segment.
///
/// `p0` is the segment start, `p1`/`p2` the control points, `p3` the end.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Element {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
}

impl Element {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// All four control points in order
    pub fn points(&self) -> [DVec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

/// One continuous pen-down stroke
pub type StrokeGroup = Vec<Element>;

/// On-disk shape of a corpus file. Unknown fields are ignored.
#[derive(Deserialize)]
struct CorpusFile {
    strokes: Vec<StrokeGroup>,
}

/// The full, immutable stroke corpus
#[derive(Debug, Clone)]
pub struct Corpus {
    name: String,
    groups: Vec<StrokeGroup>,
    total: usize,
}

impl Corpus {
    /// Build a corpus from already-decoded stroke-groups
    pub fn new(name: impl Into<String>, groups: Vec<StrokeGroup>) -> Self {
        let total = groups.iter().map(Vec::len).sum();
        Self {
            name: name.into(),
            groups,
            total,
        }
    }

    /// Parse a corpus from JSON text
    pub fn parse(ctx: &SourceContext) -> Result<Self> {
        let file: CorpusFile =
            serde_json::from_str(&ctx.source).map_err(|e| Error::malformed(ctx, &e))?;
        let corpus = Self::new(ctx.name.clone(), file.strokes);
        debug!(
            corpus = corpus.name.as_str(),
            groups = corpus.groups.len(),
            total = corpus.total,
            "parsed corpus"
        );
        Ok(corpus)
    }

    /// Read and parse a corpus file
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            action: "read",
            path: path.to_string(),
            source,
        })?;
        Self::parse(&SourceContext::new(path.as_str(), source))
    }

    /// Name of the source this corpus came from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &[StrokeGroup] {
        &self.groups
    }

    /// Total element count across all groups
    pub fn total_elements(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All elements in corpus order, ignoring group boundaries
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.groups.iter().flatten()
    }

    /// Find the stroke-group holding a 1-based global element index.
    ///
    /// Returns `(group, local)` with both zero-based.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index == 0 {
            return None;
        }
        let mut consumed = 0;
        for (group, elements) in self.groups.iter().enumerate() {
            if index <= consumed + elements.len() {
                return Some((group, index - consumed - 1));
            }
            consumed += elements.len();
        }
        None
    }
}
