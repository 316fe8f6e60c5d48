//! Escaping for the places source text lands in an MDX page.

use std::collections::HashSet;

/// Escape a value for a double- or single-quoted JSX/HTML attribute.
pub fn attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape plain text placed in MDX body content (headings, paragraphs).
///
/// Braces would otherwise open a JSX expression.
pub fn text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Component identifier for a function name: "fill-between" → "FILLBETWEEN".
///
/// Characters that cannot appear in a JS identifier are dropped.
pub fn identifier(name: &str) -> String {
    let ident: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_uppercase();
    match ident.chars().next() {
        Some(c) if !c.is_numeric() => ident,
        _ => format!("_{}", ident),
    }
}

/// Identifiers for `names`, suffixed with `_2`, `_3`, ... where they collide.
pub fn unique_identifiers<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| {
            let base = identifier(name.as_ref());
            let mut ident = base.clone();
            let mut n = 1;
            while !seen.insert(ident.clone()) {
                n += 1;
                ident = format!("{}_{}", base, n);
            }
            ident
        })
        .collect()
}

/// Double-quoted JSON/JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
