//! Element selection: which elements are visible for a cursor/offset/mode.
//!
//! Elements are addressed by a 1-based global index that runs across
//! stroke-group boundaries. A [`Window`] includes exactly the global indices in
//! `(effective_start, cursor]`, where `effective_start` is the offset in
//! [`WindowMode::Offset`] and zero in [`WindowMode::Full`].

use std::fmt;

use crate::corpus::{Corpus, Element};

/// Whether everything up to the cursor is shown, or only the range above a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Full,
    Offset,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Full => f.write_str("Full"),
            WindowMode::Offset => f.write_str("Offset"),
        }
    }
}

/// Cursor, offset and mode: everything the selector needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub cursor: usize,
    pub offset: usize,
    pub mode: WindowMode,
}

impl Window {
    /// Everything from the first element up to `cursor`
    pub fn full(cursor: usize) -> Self {
        Self {
            cursor,
            offset: 0,
            mode: WindowMode::Full,
        }
    }

    /// Only the elements above `offset`, up to `cursor`
    pub fn offset(cursor: usize, offset: usize) -> Self {
        Self {
            cursor,
            offset,
            mode: WindowMode::Offset,
        }
    }

    /// Global index below which nothing is included (exclusive floor)
    pub fn effective_start(&self) -> usize {
        match self.mode {
            WindowMode::Full => 0,
            WindowMode::Offset => self.offset,
        }
    }

    /// Number of elements this window asks for
    pub fn len(&self) -> usize {
        self.cursor.saturating_sub(self.effective_start())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One selected element with its position in the corpus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Included<'a> {
    pub element: &'a Element,
    /// Zero-based stroke-group index
    pub group: usize,
    /// 1-based global element index
    pub index: usize,
}

/// The contiguous, corpus-ordered elements a window selects
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    window: Window,
    items: Vec<Included<'a>>,
}

impl<'a> Selection<'a> {
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn items(&self) -> &[Included<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The selected elements, in corpus order
    pub fn elements(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.items.iter().map(|inc| inc.element)
    }

    /// First and last global index, if anything was selected
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((self.items.first()?.index, self.items.last()?.index))
    }
}

/// Select the elements with global index in `(effective_start, cursor]`.
///
/// Does not clamp: a cursor beyond the corpus just runs out of elements, and a
/// cursor at or below the floor selects nothing.
pub fn select<'a>(corpus: &'a Corpus, window: &Window) -> Selection<'a> {
    let start = window.effective_start();
    let wanted = window.len();
    let mut items = Vec::with_capacity(wanted.min(corpus.total_elements()));

    let mut consumed = 0;
    for (group, elements) in corpus.groups().iter().enumerate() {
        if items.len() >= wanted {
            break;
        }
        if consumed + elements.len() > start {
            let local_start = start.saturating_sub(consumed);
            for (local, element) in elements.iter().enumerate().skip(local_start) {
                if items.len() >= wanted {
                    break;
                }
                items.push(Included {
                    element,
                    group,
                    index: consumed + local + 1,
                });
            }
        }
        consumed += elements.len();
    }

    Selection {
        window: *window,
        items,
    }
}
