//! Standalone image previews of example blocks.

use crate::layout::SourceLayout;
use crate::typst::{Compiler, ImageFormat, OutputFormat};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Library import used when none is given on the command line.
pub const DEFAULT_CETZ: &str = "@preview/cetz:0.4.2";

/// Wrap example code in a page holding a single canvas.
pub fn canvas_source(code: &str, cetz: &str) -> String {
    format!(
        "#import \"{}\" as cetz: *\n\
         #set page(width: auto, height: auto, margin: 0.5cm)\n\
         #cetz.canvas({{ import cetz.draw: *\n{}\n}})\n",
        cetz, code
    )
}

/// Outcome counts of one [`PreviewRenderer::render_all`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreviewStats {
    pub rendered: usize,
    pub failed: usize,
}

pub struct PreviewRenderer<'a> {
    compiler: &'a dyn Compiler,
    cetz: &'a str,
    dir: &'a Path,
    format: ImageFormat,
}

impl<'a> PreviewRenderer<'a> {
    pub fn new(compiler: &'a dyn Compiler, cetz: &'a str, dir: &'a Path, format: ImageFormat) -> Self {
        Self {
            compiler,
            cetz,
            dir,
            format,
        }
    }

    /// Render one image.
    pub fn render(&self, code: &str, output: &Path) -> Result<()> {
        self.compiler.compile(
            &canvas_source(code, self.cetz),
            output,
            OutputFormat::Image(self.format),
        )
    }

    pub fn output_path(&self, layout: &SourceLayout, function: &str, index: usize) -> PathBuf {
        self.dir
            .join(layout.image_file_name(function, index, self.format.extension()))
    }

    /// Render every example of a function; failures are logged and skipped.
    pub fn render_all(&self, layout: &SourceLayout, function: &str, examples: &[String]) -> PreviewStats {
        let mut stats = PreviewStats::default();
        for (i, code) in examples.iter().enumerate() {
            let path = self.output_path(layout, function, i);
            let file_name = path.file_name().unwrap_or_default().to_string_lossy();
            match self.render(code, &path) {
                Ok(()) => {
                    stats.rendered += 1;
                    log::info!(
                        "generated image {} ({}/{})",
                        file_name,
                        i + 1,
                        examples.len()
                    );
                }
                Err(e) => {
                    stats.failed += 1;
                    log::error!("failed to generate image {}: {:#}", file_name, e);
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::tests::FakeCompiler;

    #[test]
    fn canvas_wraps_code() {
        let src = canvas_source("circle((0, 0))", DEFAULT_CETZ);
        assert_eq!(
            src,
            "#import \"@preview/cetz:0.4.2\" as cetz: *\n\
             #set page(width: auto, height: auto, margin: 0.5cm)\n\
             #cetz.canvas({ import cetz.draw: *\ncircle((0, 0))\n})\n"
        );
    }

    #[test]
    fn renders_each_example_and_counts_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let compiler = FakeCompiler::default();
        let renderer = PreviewRenderer::new(&compiler, "@local/cetz:0.5.0", dir.path(), ImageFormat::Svg);
        let layout = SourceLayout::from_source("src/draw/shapes.typ").unwrap();

        let stats = renderer.render_all(
            &layout,
            "rect",
            &["rect((0,0), (1,1))".to_string(), "FAIL()".to_string()],
        );

        assert_eq!(stats, PreviewStats { rendered: 1, failed: 1 });
        assert!(dir.path().join("draw_shapes_rect_0.svg").exists());
        assert!(!dir.path().join("draw_shapes_rect_1.svg").exists());

        let calls = compiler.calls.borrow();
        assert_eq!(calls[0].1, OutputFormat::Image(ImageFormat::Svg));
        assert!(calls[0].0.contains("#import \"@local/cetz:0.5.0\""));
    }

    #[test]
    fn output_path_uses_format_extension() {
        let compiler = FakeCompiler::default();
        let dir = Path::new("images");
        let renderer = PreviewRenderer::new(&compiler, DEFAULT_CETZ, dir, ImageFormat::Png);
        let layout = SourceLayout::from_source("src/canvas.typ").unwrap();
        assert_eq!(
            renderer.output_path(&layout, "canvas", 0),
            dir.join("canvas_canvas_0.png")
        );
    }
}
