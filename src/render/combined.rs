//! Aggregating page that re-exports and embeds every public function page of
//! one source file.

use crate::escape;
use crate::layout::page_file_name;

/// Render the combined page, or `None` when there is nothing public to show.
pub fn render<S: AsRef<str>>(functions: &[S]) -> Option<String> {
    if functions.is_empty() {
        return None;
    }

    let idents = escape::unique_identifiers(functions);

    let mut lines: Vec<String> = Vec::new();
    for (name, ident) in functions.iter().zip(&idents) {
        let path = format!("./{}", page_file_name(name.as_ref()));
        lines.push(format!("import {} from {};", ident, escape::js_string(&path)));
        lines.push(format!("export {{ {} }};", ident));
    }
    lines.push(String::new());

    for (name, ident) in functions.iter().zip(&idents) {
        lines.push(format!("## {}\n", escape::text(name.as_ref())));
        lines.push(format!("<{} />", ident));
        lines.push(String::new());
    }

    Some(lines.join("\n"))
}
