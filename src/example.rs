//! Fenced `example` blocks embedded in doc comments.
//!
//! Matches ```` ```example ````, ```` ```example-vertical ```` and the same with
//! a leading `typ`/`typc` language tag.

use regex::Regex;
use std::sync::LazyLock;

static RE_EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:typc?\s+)?(?:example|example-vertical)\s*\n(.*?)```").unwrap()
});

/// Extract every example block, dedented, in document order.
pub fn extract(text: &str) -> Vec<String> {
    RE_EXAMPLE
        .captures_iter(text)
        .map(|caps| dedent(&caps[1]))
        .collect()
}

/// The text with all example blocks removed.
pub fn strip(text: &str) -> String {
    RE_EXAMPLE.replace_all(text, "").into_owned()
}

/// Remove surrounding blank lines and the common leading indentation.
///
/// Blank lines inside the block come out empty.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |e| e + 1);
    let lines = &lines[start..end];

    let min_indent = lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| if is_blank(l) { "" } else { &l[min_indent..] })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Bytes of leading spaces and tabs.
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_dedents() {
        let text = "```example\n  foo()\n  bar()\n```";
        assert_eq!(extract(text), ["foo()\nbar()"]);
    }

    #[test]
    fn keeps_relative_indentation() {
        let text = "```example\n    a\n      b\n\n    c\n```";
        assert_eq!(extract(text), ["a\n  b\n\nc"]);
    }

    #[test]
    fn language_tags_and_vertical_variant() {
        let text = "Intro\n```typc example\nline((0,0), (1,1))\n```\nMiddle\n```example-vertical\ncircle(())\n```\n```typ example\nrect((0,0), (1,1))\n```";
        assert_eq!(
            extract(text),
            ["line((0,0), (1,1))", "circle(())", "rect((0,0), (1,1))"]
        );
    }

    #[test]
    fn ignores_other_fences() {
        let text = "```typ\nlet x = 1\n```\n```example\nok\n```";
        assert_eq!(extract(text), ["ok"]);
    }

    #[test]
    fn empty_text_has_no_examples() {
        assert!(extract("").is_empty());
        assert!(extract("just words").is_empty());
    }

    #[test]
    fn strip_removes_blocks_only() {
        let text = "Draws a line.\n```example\nline()\n```\nMore text.";
        assert_eq!(strip(text), "Draws a line.\n\nMore text.");
    }

    #[test]
    fn dedent_trims_blank_edges() {
        assert_eq!(dedent("\n\n  a\n  b\n  \n"), "a\nb");
        assert_eq!(dedent("  \n \n"), "");
    }

    #[test]
    fn dedent_mixed() {
        assert_eq!(dedent("  a\n    b\n  c"), "a\n  b\nc");
    }
}
