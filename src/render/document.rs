//! SVG document assembly

use std::fmt;

use ::svg::Document;
use glam::DVec2;
use ::svg::node::element::{Group, Path};

use super::RenderOptions;
use crate::errors::{Error, Result};
use crate::geometry::BoundingBox;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A complete SVG document for one navigation step.
///
/// Always rebuilt from scratch; never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    bounds: BoundingBox,
    path: String,
    markup: String,
    elements: usize,
}

impl VectorDocument {
    /// The viewport box, after any padding of flat axes
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of elements drawn, as recorded by the renderer
    pub fn element_count(&self) -> usize {
        self.elements
    }

    pub(crate) fn with_element_count(mut self, elements: usize) -> Self {
        self.elements = elements;
        self
    }

    /// The `d` attribute of the single drawn path
    pub fn path_data(&self) -> &str {
        &self.path
    }

    /// Serialized SVG, one element per line, nested elements indented
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// `minX minY width height`, exactly the bounding box
pub fn view_box(bounds: &BoundingBox) -> String {
    format!(
        "{} {} {} {}",
        bounds.min.x,
        bounds.min.y,
        bounds.width(),
        bounds.height()
    )
}

/// Flip Y and shift back into the box so the corpus' Y-up drawing reads upright.
pub fn flip_transform(bounds: &BoundingBox) -> String {
    format!(
        "scale(1, -1) translate(0, {})",
        -bounds.max.y - bounds.min.y
    )
}

/// Give a flat axis the stroke's width so the viewport keeps a real area.
///
/// Axes with a positive extent are left exactly as they are.
pub fn pad_flat_axes(bounds: &BoundingBox, stroke_width: f64) -> BoundingBox {
    let half = DVec2::splat(stroke_width.max(0.0) / 2.0);
    let flat = (bounds.max - bounds.min).cmple(DVec2::ZERO);
    let pad = DVec2::select(flat, half, DVec2::ZERO);
    BoundingBox {
        min: bounds.min - pad,
        max: bounds.max + pad,
    }
}

/// Indent nested elements by two spaces per level.
fn indent(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + 16);
    let mut depth = 0usize;
    for line in markup.lines() {
        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
        if line.starts_with('<') && !line.starts_with("</") && !line.ends_with("/>") {
            depth += 1;
        }
    }
    out
}

/// Wrap one path in a document whose viewport is the bounding box.
///
/// A box that is flat on one or both axes (a dot, a straight horizontal or
/// vertical stroke) is padded by half the stroke width on that axis. An empty
/// or non-finite box, or one still without area after padding, is refused.
pub fn build_document(
    bounds: &BoundingBox,
    path: &str,
    options: &RenderOptions,
) -> Result<VectorDocument> {
    if bounds.is_empty() || !bounds.is_finite() {
        return Err(Error::InvalidBounds);
    }
    let bounds = pad_flat_axes(bounds, options.stroke_width);
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 || !bounds.is_finite() {
        return Err(Error::InvalidBounds);
    }

    let drawn = Path::new()
        .set("d", path)
        .set("fill", options.fill.as_str())
        .set("stroke", options.stroke.as_str())
        .set("stroke-width", options.stroke_width.to_string())
        .set("stroke-linecap", options.stroke_linecap.as_str());

    let group = Group::new()
        .set("transform", flip_transform(&bounds))
        .add(drawn);

    let document = Document::new()
        .set("xmlns", SVG_NS)
        .set("viewBox", view_box(&bounds))
        .add(group);

    Ok(VectorDocument {
        bounds,
        path: path.to_string(),
        markup: indent(&document.to_string()),
        elements: path.matches('C').count(),
    })
}
