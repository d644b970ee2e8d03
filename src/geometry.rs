//! Path flattening and bounding boxes over element ranges.

use glam::DVec2;

use crate::corpus::Element;

/// Flatten an ordered element sequence into one SVG path command string.
///
/// The first element contributes a move to its `p0`; every element then
/// contributes a cubic curve through `p1`, `p2` to `p3`. Stroke-group
/// boundaries do not break the path. An empty sequence yields `""`.
pub fn path_data<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let mut d = String::new();
    for (i, el) in elements.into_iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M{},{} ", el.p0.x, el.p0.y));
        }
        d.push_str(&format!(
            "C{},{} {},{} {},{} ",
            el.p1.x, el.p1.y, el.p2.x, el.p2.y, el.p3.x, el.p3.y
        ));
    }
    d
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Create an empty bounding box (will expand on first point)
    pub const fn new() -> Self {
        BoundingBox {
            min: DVec2::INFINITY,
            max: DVec2::NEG_INFINITY,
        }
    }

    /// Tight box over every control point of every element
    pub fn of<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut bb = Self::new();
        for el in elements {
            bb.expand_element(el);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include all four control points of an element
    pub fn expand_element(&mut self, el: &Element) {
        for p in el.points() {
            self.expand_point(p);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn el(points: [(f64, f64); 4]) -> Element {
        let [a, b, c, d] = points.map(|(x, y)| dvec2(x, y));
        Element::new(a, b, c, d)
    }

    fn sample() -> Vec<Element> {
        vec![
            el([(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)]),
            el([(4.0, 0.0), (5.0, -1.5), (6.0, -1.0), (7.0, 0.5)]),
            el([(20.0, 20.0), (21.0, 22.0), (-2.0, 23.0), (24.0, 19.0)]),
        ]
    }

    #[test]
    fn test_path_data_empty() {
        assert_eq!(path_data(std::iter::empty()), "");
    }

    #[test]
    fn test_path_data_single() {
        let d = path_data(&sample()[..1]);
        assert!(d.ends_with(' '));
        insta::assert_snapshot!(d.trim_end(), @"M0,0 C1,2 3,2 4,0");
    }

    #[test]
    fn test_path_data_one_move_per_sequence() {
        let d = path_data(&sample());
        insta::assert_snapshot!(d.trim_end(), @"M0,0 C1,2 3,2 4,0 C5,-1.5 6,-1 7,0.5 C21,22 -2,23 24,19");
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('C').count(), 3);
    }

    #[test]
    fn test_path_data_ignores_p0_after_first() {
        // p0 of the second element is not where the first ended
        let elements = [
            el([(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]),
            el([(9.0, 9.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        ];
        let d = path_data(&elements);
        assert!(!d.contains("9,9"));
    }

    #[test]
    fn test_bbox_new_is_empty() {
        let bb = BoundingBox::new();
        assert!(bb.is_empty());
        assert!(!bb.is_finite());
        assert_eq!(BoundingBox::of(std::iter::empty()), bb);
    }

    #[test]
    fn test_bbox_covers_control_points() {
        let bb = BoundingBox::of(&sample());
        assert_eq!(bb.min, dvec2(-2.0, -1.5));
        assert_eq!(bb.max, dvec2(24.0, 23.0));
        assert_eq!(bb.width(), 26.0);
        assert_eq!(bb.height(), 24.5);
    }

    #[test]
    fn test_bbox_matches_brute_force_on_every_prefix() {
        let elements = sample();
        for n in 1..=elements.len() {
            let range = &elements[..n];
            let bb = BoundingBox::of(range);
            let points: Vec<DVec2> = range.iter().flat_map(|e| e.points()).collect();
            let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            assert!(bb.min.x <= bb.max.x && bb.min.y <= bb.max.y);
            assert_eq!(bb.min, dvec2(min_x, min_y), "prefix {n}");
            assert_eq!(bb.max, dvec2(max_x, max_y), "prefix {n}");
        }
    }

    #[test]
    fn test_bbox_single_point_is_not_empty() {
        let e = el([(1.0, 1.0); 4]);
        let bb = BoundingBox::of([&e]);
        assert!(!bb.is_empty());
        assert_eq!(bb.width(), 0.0);
    }
}
