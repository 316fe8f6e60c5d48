//! Output paths derived from a source file path.
//!
//! "src/draw/shapes.typ" → `<output>/draw/shapes/` holding one page per
//! function plus `shapes-combined.mdx`; images are named `draw_shapes_<fn>_<i>.<ext>`.

use crate::render::EXTENSION;
use std::path::{Path, PathBuf};

const SOURCE_PREFIX: &str = "src/";
const SOURCE_SUFFIX: &str = ".typ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    segments: Vec<String>,
}

impl SourceLayout {
    /// Returns `None` when the path has no usable segment.
    pub fn from_source(path: &str) -> Option<Self> {
        let trimmed = path.strip_prefix(SOURCE_PREFIX).unwrap_or(path);
        let trimmed = trimmed.strip_suffix(SOURCE_SUFFIX).unwrap_or(trimmed);

        let segments: Vec<String> = trimmed
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Directory holding this source's pages.
    pub fn dir_in(&self, root: &Path) -> PathBuf {
        self.segments.iter().fold(root.to_path_buf(), |dir, s| dir.join(s))
    }

    /// Prefix for image file names, e.g. "draw_shapes".
    pub fn flat_name(&self) -> String {
        self.segments.join("_")
    }

    /// File name of the aggregating page, e.g. "shapes-combined.mdx".
    pub fn combined_file_name(&self) -> String {
        let last = self.segments.last().map(String::as_str).unwrap_or_default();
        format!("{}-combined.{}", last, EXTENSION)
    }

    pub fn image_file_name(&self, function: &str, index: usize, ext: &str) -> String {
        format!("{}_{}_{}.{}", self.flat_name(), function, index, ext)
    }
}

/// Whether a function name can be used as a file name component.
///
/// Path separators and `..` would place pages outside the source's directory.
pub fn is_safe_name(function: &str) -> bool {
    !function.is_empty()
        && !function.contains(['/', '\\'])
        && !function.contains("..")
}

/// Page file name for a function, e.g. "rect.mdx".
pub fn page_file_name(function: &str) -> String {
    format!("{}.{}", function, EXTENSION)
}

impl std::fmt::Display for SourceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}
