//! Step through recorded handwriting strokes one Bézier segment at a time.
//!
//! A [`Corpus`] holds stroke-groups of cubic Bézier [`Element`]s. A
//! [`Navigator`] tracks which of them are visible, [`render_window`] turns the
//! visible range into one SVG [`VectorDocument`], and a [`RenderSink`] persists
//! it. [`Session`] ties these together for the interactive viewer;
//! [`batch::export_steps`] drives the linear exporter.
//!
//! ```
//! use inkstep::{Corpus, MemorySink, RenderOptions, Session, SourceContext, Transition};
//!
//! let json = r#"{"strokes": [[
//!     {"p0": [0, 0], "p1": [1, 2], "p2": [3, 2], "p3": [4, 0]},
//!     {"p0": [4, 0], "p1": [5, -2], "p2": [7, -2], "p3": [8, 0]}
//! ]]}"#;
//! let corpus = Corpus::parse(&SourceContext::new("<doc>", json))?;
//! let mut session = Session::new(&corpus, MemorySink::new(), RenderOptions::default())?;
//! session.render()?;
//! session.apply(Transition::StepForward)?;
//! assert_eq!(session.status_text(), "Element 2/2 | Full | Stroke 1/1");
//! # Ok::<(), inkstep::Error>(())
//! ```

pub mod batch;
pub mod corpus;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod navigation;
pub mod render;
pub mod session;
pub mod sink;
pub mod window;

pub use batch::{Prompt, export_steps};
pub use corpus::{Corpus, Element, StrokeGroup};
pub use errors::{Error, Result, SourceContext};
pub use geometry::{BoundingBox, path_data};
pub use navigation::{Navigator, Transition};
pub use render::{RenderOptions, VectorDocument, build_document, render_window};
pub use session::{RenderOutcome, Session};
pub use sink::{MemorySink, RenderSink};
pub use window::{Included, Selection, Window, WindowMode, select};
