//! Drives the whole run: one directory per source file, one page per function,
//! optional previews, then the combined page.

use crate::convert::MarkupConverter;
use crate::example;
use crate::layout::{is_safe_name, page_file_name, SourceLayout};
use crate::model::{Docs, SourceFile};
use crate::preview::PreviewRenderer;
use crate::render;
use crate::typst::{Compiler, ImageFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the generated page tree
    pub output_dir: PathBuf,
    /// Library import used by previews, e.g. "@preview/cetz:0.4.2"
    pub cetz: String,
    /// Preview directory; `None` disables previews
    pub image_dir: Option<PathBuf>,
    pub image_format: ImageFormat,
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub pages_failed: usize,
    pub images: usize,
    pub images_failed: usize,
    pub combined: usize,
    pub sources_failed: usize,
}

impl Summary {
    pub fn failures(&self) -> usize {
        self.pages_failed + self.images_failed + self.sources_failed
    }
}

pub struct Generator<'a> {
    config: &'a Config,
    converter: MarkupConverter<'a>,
    previews: Option<PreviewRenderer<'a>>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, compiler: &'a dyn Compiler) -> Self {
        let previews = config
            .image_dir
            .as_deref()
            .map(|dir| PreviewRenderer::new(compiler, &config.cetz, dir, config.image_format));
        Self {
            config,
            converter: MarkupConverter::new(compiler),
            previews,
        }
    }

    /// Generate everything. Only failing to create the output roots is fatal.
    pub fn run(&self, docs: &Docs) -> Result<Summary> {
        create_dir(&self.config.output_dir)?;
        if let Some(dir) = &self.config.image_dir {
            create_dir(dir)?;
        }

        let mut summary = Summary::default();
        for source in &docs.files {
            self.process_source(source, &mut summary);
        }
        Ok(summary)
    }

    fn process_source(&self, source: &SourceFile, summary: &mut Summary) {
        log::info!("processing {}", source.path);

        let Some(layout) = SourceLayout::from_source(&source.path) else {
            log::error!("cannot derive an output path from {:?}, skipping", source.path);
            summary.sources_failed += 1;
            return;
        };

        let dir = layout.dir_in(&self.config.output_dir);
        if let Err(e) = fs::create_dir_all(&dir) {
            log::error!("failed to create {}: {}", dir.display(), e);
            summary.sources_failed += 1;
            return;
        }

        let mut public: Vec<&str> = Vec::new();
        for record in &source.functions {
            let name = record.name();
            if !is_safe_name(name) {
                summary.pages_failed += 1;
                log::error!("invalid function name {:?} in {}, skipping", name, source.path);
                continue;
            }
            if !record.is_private() {
                public.push(name);
            }

            let file_name = page_file_name(name);
            let page = render::page::render(record, &self.converter);
            match fs::write(dir.join(&file_name), page) {
                Ok(()) => {
                    summary.pages += 1;
                    log::info!("generated page {}/{}", layout, file_name);
                }
                Err(e) => {
                    summary.pages_failed += 1;
                    log::error!("failed to write page {}/{}: {}", layout, file_name, e);
                }
            }

            if let Some(previews) = &self.previews {
                let examples = example::extract(&record.comment.text);
                let stats = previews.render_all(&layout, name, &examples);
                summary.images += stats.rendered;
                summary.images_failed += stats.failed;
            }
        }

        self.write_combined(&layout, &dir, &public, summary);
    }

    fn write_combined(&self, layout: &SourceLayout, dir: &Path, public: &[&str], summary: &mut Summary) {
        let Some(page) = render::combined::render(public) else {
            log::info!("no public functions found for {}, skipping combined file", layout);
            return;
        };

        let file_name = layout.combined_file_name();
        match fs::write(dir.join(&file_name), page) {
            Ok(()) => {
                summary.combined += 1;
                log::info!(
                    "generated combined {}/{} ({} functions)",
                    layout,
                    file_name,
                    public.len()
                );
            }
            Err(e) => {
                summary.pages_failed += 1;
                log::error!("failed to write combined {}/{}: {}", layout, file_name, e);
            }
        }
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}
