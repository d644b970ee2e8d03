//! SVG rendering for stroke windows
//!
//! This module is organized into submodules:
//! - `defaults`: the fixed stroke style
//! - `document`: SVG document assembly

pub mod defaults;
pub mod document;

pub use document::{VectorDocument, build_document};

use crate::corpus::Corpus;
use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, path_data};
use crate::log::debug;
use crate::window::{Window, select};

/// Style attributes of the single drawn path
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_linecap: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fill: defaults::FILL.to_string(),
            stroke: defaults::STROKE.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            stroke_linecap: defaults::STROKE_LINECAP.to_string(),
        }
    }
}

/// Select the window's elements and build their document from scratch.
///
/// An empty selection is reported as [`Error::EmptySelection`] before any
/// geometry is computed.
pub fn render_window(
    corpus: &Corpus,
    window: &Window,
    options: &RenderOptions,
) -> Result<VectorDocument> {
    let selection = select(corpus, window);
    if selection.is_empty() {
        return Err(Error::EmptySelection {
            floor: window.effective_start(),
            cursor: window.cursor,
        });
    }

    let bounds = BoundingBox::of(selection.elements());
    let path = path_data(selection.elements());

    debug!(
        cursor = window.cursor,
        floor = window.effective_start(),
        elements = selection.len(),
        span = ?selection.span(),
        min_x = bounds.min.x,
        min_y = bounds.min.y,
        max_x = bounds.max.x,
        max_y = bounds.max.y,
        "render window"
    );

    Ok(build_document(&bounds, &path, options)?.with_element_count(selection.len()))
}
