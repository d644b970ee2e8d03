//! Render sink that writes each step to disk: the SVG at the requested path,
//! and a PNG rasterized from it next to it.

use camino::{Utf8Path, Utf8PathBuf};
use inkstep::{Error, RenderSink, VectorDocument};
use thiserror::Error;
use tiny_skia::{Color, Pixmap, Transform};

/// Pixel scale and background of the raster output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Pixels per viewBox unit
    pub scale: f32,
    /// `None` leaves the canvas transparent
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("SVG could not be parsed")]
    Parse(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Canvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {message}")]
    Encode { message: String },
}

/// The raster companion of an SVG path: same path, `.png` extension.
///
/// ```
/// use camino::Utf8Path;
/// assert_eq!(inkstep_raster::png_path_for(Utf8Path::new("out/step.svg")), "out/step.png");
/// assert_eq!(inkstep_raster::png_path_for(Utf8Path::new("step")), "step.png");
/// ```
pub fn png_path_for(svg_path: &Utf8Path) -> Utf8PathBuf {
    svg_path.with_extension("png")
}

/// Rasterize SVG markup at the document's own size times `options.scale`.
pub fn rasterize(svg: &str, options: &RasterOptions) -> Result<Pixmap, RasterError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;

    let size = tree.size();
    let width = (size.width() * options.scale).ceil().max(1.0) as u32;
    let height = (size.height() * options.scale).ceil().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Canvas { width, height })?;
    if let Some(background) = options.background {
        pixmap.fill(background);
    }

    resvg::render(
        &tree,
        Transform::from_scale(options.scale, options.scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Rasterize and encode in one go
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    rasterize(svg, options)?
        .encode_png()
        .map_err(|e| RasterError::Encode {
            message: e.to_string(),
        })
}

/// Overwrites one SVG file and its PNG companion on every write.
#[derive(Debug, Clone)]
pub struct FileSink {
    svg_path: Utf8PathBuf,
    png_path: Utf8PathBuf,
    options: RasterOptions,
}

impl FileSink {
    pub fn new(svg_path: impl Into<Utf8PathBuf>) -> Self {
        Self::with_options(svg_path, RasterOptions::default())
    }

    pub fn with_options(svg_path: impl Into<Utf8PathBuf>, options: RasterOptions) -> Self {
        let svg_path = svg_path.into();
        let png_path = png_path_for(&svg_path);
        Self {
            svg_path,
            png_path,
            options,
        }
    }

    pub fn svg_path(&self) -> &Utf8Path {
        &self.svg_path
    }

    pub fn png_path(&self) -> &Utf8Path {
        &self.png_path
    }
}

fn write_file(path: &Utf8Path, contents: &[u8]) -> inkstep::Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Io {
        action: "write",
        path: path.to_string(),
        source,
    })
}

impl RenderSink for FileSink {
    fn write(&mut self, document: &VectorDocument) -> inkstep::Result<()> {
        write_file(&self.svg_path, document.markup().as_bytes())?;
        let png = svg_to_png(document.markup(), &self.options)
            .map_err(|e| Error::sink("rasterizing", e))?;
        write_file(&self.png_path, &png)?;
        tracing::debug!(
            svg = %self.svg_path,
            png = %self.png_path,
            bytes = png.len(),
            "wrote step"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkstep::{Corpus, RenderOptions, SourceContext, Window, render_window};

    const CORPUS: &str = r#"{"strokes": [[
        {"p0": [0, 0], "p1": [10, 20], "p2": [30, 20], "p3": [40, 0]},
        {"p0": [40, 0], "p1": [50, -10], "p2": [70, -10], "p3": [80, 0]}
    ]]}"#;

    fn document(cursor: usize) -> VectorDocument {
        let corpus = Corpus::parse(&SourceContext::new("<test>", CORPUS)).unwrap();
        render_window(&corpus, &Window::full(cursor), &RenderOptions::default()).unwrap()
    }

    fn temp_svg(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join("step.svg")).unwrap()
    }

    #[test]
    fn png_path_replaces_extension() {
        assert_eq!(png_path_for(Utf8Path::new("/tmp/a.b.svg")), "/tmp/a.b.png");
        assert_eq!(png_path_for(Utf8Path::new("drawing.xml")), "drawing.png");
    }

    #[test]
    fn raster_size_follows_view_box() {
        let pixmap = rasterize(document(1).markup(), &RasterOptions::default()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 20));

        let doubled = RasterOptions {
            scale: 2.0,
            ..RasterOptions::default()
        };
        let pixmap = rasterize(document(2).markup(), &doubled).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (160, 60));
    }

    #[test]
    fn stroke_paints_pixels() {
        let pixmap = rasterize(document(2).markup(), &RasterOptions::default()).unwrap();
        assert!(pixmap.pixels().iter().any(|p| p.alpha() > 0));
    }

    #[test]
    fn background_fills_canvas() {
        let options = RasterOptions {
            background: Some(Color::WHITE),
            ..RasterOptions::default()
        };
        let pixmap = rasterize(document(1).markup(), &options).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }

    fn single(json_element: &str) -> VectorDocument {
        let text = format!(r#"{{"strokes": [[{json_element}]]}}"#);
        let corpus = Corpus::parse(&SourceContext::new("<test>", text)).unwrap();
        render_window(&corpus, &Window::full(1), &RenderOptions::default()).unwrap()
    }

    #[test]
    fn dot_rasterizes_at_stroke_width() {
        let doc = single(r#"{"p0": [500, 500], "p1": [500, 500], "p2": [500, 500], "p3": [500, 500]}"#);
        assert!(doc.markup().contains(r#"viewBox="470 470 60 60""#), "{}", doc.markup());
        let pixmap = rasterize(doc.markup(), &RasterOptions::default()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (60, 60));
    }

    #[test]
    fn flat_stroke_keeps_its_length() {
        let doc = single(r#"{"p0": [100, 500], "p1": [200, 500], "p2": [300, 500], "p3": [400, 500]}"#);
        assert!(doc.markup().contains(r#"viewBox="100 470 300 60""#), "{}", doc.markup());
        let pixmap = rasterize(doc.markup(), &RasterOptions::default()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (300, 60));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = rasterize("not svg at all", &RasterOptions::default()).unwrap_err();
        assert!(matches!(err, RasterError::Parse(_)));
    }

    #[test]
    fn file_sink_overwrites_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_svg(&dir));

        sink.write(&document(1)).unwrap();
        sink.write(&document(2)).unwrap();

        let svg = std::fs::read_to_string(sink.svg_path()).unwrap();
        assert_eq!(svg, document(2).markup());

        let png = Pixmap::load_png(sink.png_path()).unwrap();
        assert_eq!((png.width(), png.height()), (80, 30));
    }

    #[test]
    fn file_sink_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_svg(&dir).join("missing").join("step.svg"));
        let err = sink.write(&document(1)).unwrap_err();
        assert!(matches!(err, Error::Io { action: "write", .. }));
    }
}
