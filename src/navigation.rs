//! Navigation state machine over the global element index.
//!
//! The cursor always stays within `[1, total]`, and in offset mode it never
//! drops to the window floor, so the visible range is never empty.

use crate::corpus::Corpus;
use crate::errors::{Error, Result};
use crate::log::debug;
use crate::window::{Window, WindowMode};

/// A user-triggered change of navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StepForward,
    StepBackward,
    ToggleWindow,
}

/// Cursor, offset and mode, bounded by the corpus size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    window: Window,
    total: usize,
}

impl Navigator {
    /// Start at the first element, showing everything.
    pub fn new(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus {
                name: corpus.name().to_string(),
            });
        }
        Ok(Self::with_total(corpus.total_elements()))
    }

    /// Navigator over `total` elements; `total` must be non-zero.
    pub(crate) fn with_total(total: usize) -> Self {
        debug_assert!(total > 0);
        Self {
            window: Window::full(1),
            total,
        }
    }

    /// Navigator resumed at an arbitrary window, unchecked against the invariants.
    pub(crate) fn with_window(window: Window, total: usize) -> Self {
        Self { window, total }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn cursor(&self) -> usize {
        self.window.cursor
    }

    pub fn offset(&self) -> usize {
        self.window.offset
    }

    pub fn mode(&self) -> WindowMode {
        self.window.mode
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Lowest cursor value allowed by the current window
    pub fn floor(&self) -> usize {
        self.window.effective_start() + 1
    }

    /// Advance by one element, stopping at the last one.
    pub fn step_forward(&mut self) {
        self.window.cursor = (self.window.cursor + 1).min(self.total);
    }

    /// Retreat by one element, never below the window floor.
    pub fn step_backward(&mut self) {
        self.window.cursor = self.window.cursor.saturating_sub(1).max(self.floor());
    }

    /// Freeze the floor just below the cursor, or go back to showing everything.
    pub fn toggle_window(&mut self) {
        match self.window.mode {
            WindowMode::Full => {
                self.window.offset = self.window.cursor - 1;
                self.window.mode = WindowMode::Offset;
            }
            WindowMode::Offset => {
                self.window.offset = 0;
                self.window.mode = WindowMode::Full;
            }
        }
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::StepForward => self.step_forward(),
            Transition::StepBackward => self.step_backward(),
            Transition::ToggleWindow => self.toggle_window(),
        }
        debug!(
            ?transition,
            cursor = self.window.cursor,
            offset = self.window.offset,
            mode = %self.window.mode,
            "navigated"
        );
    }

    /// `Element 3/10 | Full` or `Element 7/10 | Offset 4`
    pub fn status_text(&self) -> String {
        let mode = match self.window.mode {
            WindowMode::Full => "Full".to_string(),
            WindowMode::Offset => format!("Offset {}", self.window.offset),
        };
        format!("Element {}/{} | {}", self.window.cursor, self.total, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Element;
    use glam::DVec2;

    fn nav(total: usize) -> Navigator {
        Navigator::with_total(total)
    }

    fn at(total: usize, cursor: usize) -> Navigator {
        let mut n = nav(total);
        while n.cursor() < cursor {
            n.step_forward();
        }
        n
    }

    #[test]
    fn test_initial_state() {
        let n = nav(5);
        assert_eq!(n.window(), Window::full(1));
        assert_eq!(n.floor(), 1);
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let corpus = Corpus::new("empty.json", vec![vec![], vec![]]);
        match Navigator::new(&corpus) {
            Err(Error::EmptyCorpus { name }) => assert_eq!(name, "empty.json"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_new_from_corpus_counts_elements() {
        let e = Element::new(DVec2::ZERO, DVec2::ZERO, DVec2::ZERO, DVec2::ONE);
        let corpus = Corpus::new("<test>", vec![vec![e, e], vec![e]]);
        assert_eq!(Navigator::new(&corpus).unwrap().total(), 3);
    }

    #[test]
    fn test_step_forward_clamps_at_total() {
        let mut n = at(3, 3);
        n.step_forward();
        assert_eq!(n.cursor(), 3);
    }

    #[test]
    fn test_step_backward_clamps_at_one() {
        let mut n = nav(3);
        n.step_backward();
        assert_eq!(n.cursor(), 1);
    }

    #[test]
    fn test_forward_then_backward_is_identity_below_top() {
        for start in 1..5 {
            let mut n = at(5, start);
            n.step_forward();
            n.step_backward();
            assert_eq!(n.cursor(), start, "start {start}");
        }
        let mut top = at(5, 5);
        top.step_forward();
        top.step_backward();
        assert_eq!(top.cursor(), 4);
    }

    #[test]
    fn test_backward_then_forward_is_identity_above_floor() {
        for start in 2..=5 {
            let mut n = at(5, start);
            n.step_backward();
            n.step_forward();
            assert_eq!(n.cursor(), start, "start {start}");
        }
    }

    #[test]
    fn test_toggle_twice_restores_full() {
        for cursor in 1..=5 {
            let mut n = at(5, cursor);
            n.toggle_window();
            assert_eq!(n.window(), Window::offset(cursor, cursor - 1));
            n.toggle_window();
            assert_eq!(n.window(), Window::full(cursor));
        }
    }

    #[test]
    fn test_offset_floor_blocks_backward() {
        let mut n = at(5, 5);
        n.apply(Transition::ToggleWindow);
        assert_eq!((n.offset(), n.mode()), (4, WindowMode::Offset));
        n.apply(Transition::StepBackward);
        assert_eq!(n.cursor(), 5);
        n.apply(Transition::ToggleWindow);
        assert_eq!(n.window(), Window::full(5));
    }

    #[test]
    fn test_offset_window_grows_then_shrinks_to_floor() {
        let mut n = at(6, 2);
        n.toggle_window();
        n.step_forward();
        n.step_forward();
        assert_eq!(n.window(), Window::offset(4, 1));
        assert_eq!(n.window().len(), 3);
        for _ in 0..5 {
            n.step_backward();
        }
        assert_eq!(n.cursor(), 2);
        assert_eq!(n.window().len(), 1);
    }

    #[test]
    fn test_window_never_empty() {
        let script = [
            Transition::StepForward,
            Transition::ToggleWindow,
            Transition::StepBackward,
            Transition::StepForward,
            Transition::StepForward,
            Transition::ToggleWindow,
            Transition::StepBackward,
            Transition::ToggleWindow,
            Transition::StepBackward,
            Transition::StepBackward,
        ];
        let mut n = nav(4);
        for t in script {
            n.apply(t);
            assert!(n.cursor() >= 1 && n.cursor() <= n.total());
            assert!(n.cursor() >= n.floor(), "{:?} after {t:?}", n.window());
            assert!(!n.window().is_empty());
        }
    }

    #[test]
    fn test_status_text() {
        let mut n = at(10, 3);
        assert_eq!(n.status_text(), "Element 3/10 | Full");
        n.toggle_window();
        n.step_forward();
        assert_eq!(n.status_text(), "Element 4/10 | Offset 2");
    }
}
