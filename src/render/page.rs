//! Per-function MDX page.
//!
//! Layout:
//!
//! ```text
//! <Function name="rect" parameters={{"a": {"types": "coordinate"}}}/>
//!
//! <p>converted description</p>
//!
//! ```typc example
//! rect((0, 0), (1, 1))
//! ```
//!
//! <Parameter name="a" types="coordinate">
//! <p>converted parameter text</p>
//! </Parameter>
//! ```

use crate::convert::MarkupConverter;
use crate::escape;
use crate::example;
use crate::model::{Argument, DefaultValue, FunctionRecord};

/// Language tag of re-inserted example fences.
const EXAMPLE_FENCE: &str = "```typc example";

/// Render the full page for one function.
pub fn render(record: &FunctionRecord, converter: &MarkupConverter) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(function_tag(record));
    lines.push(String::new());

    // Description without the examples
    let text = &record.comment.text;
    if !text.trim().is_empty() {
        if let Some(body) = converter.to_mdx(&example::strip(text)) {
            if !body.is_empty() {
                lines.push(body);
                lines.push(String::new());
            }
        }
    }

    for code in example::extract(text) {
        lines.push(EXAMPLE_FENCE.to_string());
        lines.push(code);
        lines.push("```".to_string());
        lines.push(String::new());
    }

    for arg in record.named_arguments() {
        lines.push(parameter_open_tag(arg));
        if !arg.text.trim().is_empty() {
            if let Some(body) = converter.to_mdx(&arg.text) {
                if !body.is_empty() {
                    lines.push(body);
                }
            }
        }
        lines.push("</Parameter>".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `<Function name="..." parameters={{...}}/>`
fn function_tag(record: &FunctionRecord) -> String {
    format!(
        "<Function name=\"{}\" parameters={{{}}}/>",
        escape::attr(record.name()),
        parameters_object(record)
    )
}

/// JS object literal mapping parameter names to their types and default.
///
/// A `null` default becomes `undefined`, so the literal never reaches the page.
fn parameters_object(record: &FunctionRecord) -> String {
    let entries: Vec<String> = record
        .named_arguments()
        .map(|arg| {
            let mut fields = vec![format!("\"types\": {}", escape::js_string(&arg.types_joined()))];
            match arg.default_value() {
                DefaultValue::Absent => {}
                DefaultValue::Undefined => fields.push("\"default\": undefined".to_string()),
                DefaultValue::Value(v) => fields.push(format!("\"default\": {}", escape::js_string(v))),
            }
            format!("{}: {{{}}}", escape::js_string(&arg.name), fields.join(", "))
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn parameter_open_tag(arg: &Argument) -> String {
    let mut attrs = vec![format!("name=\"{}\"", escape::attr(&arg.name))];
    let types = arg.types_joined();
    if !types.is_empty() {
        attrs.push(format!("types=\"{}\"", escape::attr(&types)));
    }
    if let DefaultValue::Value(v) = arg.default_value() {
        attrs.push(format!("default_value=\"{}\"", escape::attr(v)));
    }
    format!("<Parameter {}>", attrs.join(" "))
}
