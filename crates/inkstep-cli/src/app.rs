//! Application state for the viewer.

use inkstep::{Corpus, RenderOptions, RenderOutcome, Session, Transition};
use inkstep_raster::FileSink;

pub struct App<'c> {
    /// Navigator, renderer and file output
    pub session: Session<'c, FileSink>,
    /// Whether the event loop keeps going
    pub running: bool,
}

impl<'c> App<'c> {
    /// Build the session and render the first element, so the files exist
    /// before the first key press.
    pub fn new(corpus: &'c Corpus, sink: FileSink, options: RenderOptions) -> inkstep::Result<Self> {
        let mut session = Session::new(corpus, sink, options)?;
        session.render()?;
        Ok(Self {
            session,
            running: true,
        })
    }

    pub fn step_forward(&mut self) -> inkstep::Result<()> {
        self.session.apply(Transition::StepForward).map(drop)
    }

    pub fn step_backward(&mut self) -> inkstep::Result<()> {
        self.session.apply(Transition::StepBackward).map(drop)
    }

    pub fn toggle_window(&mut self) -> inkstep::Result<()> {
        self.session.apply(Transition::ToggleWindow).map(drop)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn status_text(&self) -> String {
        self.session.status_text()
    }

    /// One-line description of the last write, for the body pane
    pub fn last_render(&self) -> String {
        match self.session.last_outcome() {
            Some(RenderOutcome::Rendered { elements, bounds }) => format!(
                "{elements} element(s) in viewBox {} {} {} {} -> {} + {}",
                bounds.min.x,
                bounds.min.y,
                bounds.width(),
                bounds.height(),
                self.session.sink().svg_path(),
                self.session.sink().png_path(),
            ),
            Some(RenderOutcome::Skipped) => "nothing to render".to_string(),
            None => String::new(),
        }
    }
}
