//! Invocation of the external `typst` compiler.
//!
//! Every call writes its source to a fresh temporary `.typ` file that is
//! removed when the call returns, whatever the outcome.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Image formats the example previews can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Svg,
    Png,
    Pdf,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
        }
    }
}

/// What a single compiler run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full HTML document (needs the `html` feature flag)
    Html,
    Image(ImageFormat),
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Image(image) => image.extension(),
        }
    }
}

/// Compiles typst source into an output file.
pub trait Compiler {
    fn compile(&self, source: &str, output: &Path, format: OutputFormat) -> Result<()>;
}

/// The real `typst` binary.
pub struct Typst {
    binary: PathBuf,
}

impl Typst {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Compiler for Typst {
    fn compile(&self, source: &str, output: &Path, format: OutputFormat) -> Result<()> {
        let mut input = tempfile::Builder::new()
            .prefix("mdxdoc-")
            .suffix(".typ")
            .tempfile()
            .context("failed to create temporary input file")?;
        input
            .write_all(source.as_bytes())
            .and_then(|_| input.flush())
            .context("failed to write temporary input file")?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg("compile")
            .arg(input.path())
            .arg(output)
            .args(["--format", format.as_str()]);
        if format == OutputFormat::Html {
            cmd.args(["--features", "html"]);
        }
        log::debug!("running {:?}", cmd);

        let result = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("failed to execute {}", self.binary.display()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            bail!(
                "{} compile failed ({}): {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::Html.as_str(), "html");
        assert_eq!(OutputFormat::Image(ImageFormat::Svg).as_str(), "svg");
        assert_eq!(ImageFormat::Png.extension(), "png");
    }

    #[test]
    fn missing_binary_is_an_error() {
        let typst = Typst::new("/nonexistent/bin/typst");
        let out = tempfile::NamedTempFile::new().unwrap();
        let err = typst
            .compile("= Title", out.path(), OutputFormat::Html)
            .unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }
}
