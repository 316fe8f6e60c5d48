//! Typst markup → HTML body fragment → MDX-safe HTML.

use crate::typst::{Compiler, OutputFormat};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

static RE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<body[^>]*>(.*?)</body>").unwrap());

static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+style="[^"]*""#).unwrap());

const PREAMBLE: &str = r#"#set document(title: "Documentation")
#set text(font: "New Computer Modern")
#set par(justify: true)
"#;

/// Converts doc text through the compiler's HTML export.
pub struct MarkupConverter<'a> {
    compiler: &'a dyn Compiler,
}

impl<'a> MarkupConverter<'a> {
    pub fn new(compiler: &'a dyn Compiler) -> Self {
        Self { compiler }
    }

    /// HTML body content for `text`, or `None` if the compiler failed.
    ///
    /// Blank text converts to an empty fragment without running the compiler.
    pub fn to_html(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return Some(String::new());
        }

        let output = match tempfile::Builder::new()
            .prefix("mdxdoc-")
            .suffix(".html")
            .tempfile()
        {
            Ok(file) => file,
            Err(e) => {
                log::error!("failed to create temporary output file: {}", e);
                return None;
            }
        };

        if let Err(e) = self
            .compiler
            .compile(&document_source(text), output.path(), OutputFormat::Html)
        {
            log::error!("error generating HTML: {:#}", e);
            return None;
        }

        match fs::read_to_string(output.path()) {
            Ok(html) => Some(extract_body(&html).to_string()),
            Err(e) => {
                log::error!("failed to read generated HTML: {}", e);
                None
            }
        }
    }

    /// [`to_html`](Self::to_html) followed by [`html_to_mdx`].
    pub fn to_mdx(&self, text: &str) -> Option<String> {
        self.to_html(text).map(|html| html_to_mdx(&html))
    }
}

/// Wrap doc text in the minimal document the compiler renders.
pub fn document_source(text: &str) -> String {
    format!("{}\n{}\n", PREAMBLE, text)
}

/// Content between `<body>` and `</body>`, or the whole document.
pub fn extract_body(html: &str) -> &str {
    match RE_BODY.captures(html) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => html,
    }
}

/// Make an HTML fragment acceptable to the MDX compiler.
pub fn html_to_mdx(html: &str) -> String {
    let html = RE_STYLE.replace_all(html, "");
    html.replace("<br>", "<br />")
        .replace("<hr>", "<hr />")
        .trim()
        .to_string()
}
