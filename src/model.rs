//! Data model for the documentation JSON — one record per documented function.

use serde::{Deserialize, Deserializer};

/// Every source file of the documentation set, in document order.
#[derive(Debug, Default)]
pub struct Docs {
    pub files: Vec<SourceFile>,
}

/// The function records defined in one source file of the library.
#[derive(Debug)]
pub struct SourceFile {
    /// e.g. "src/draw/shapes.typ"
    pub path: String,
    pub functions: Vec<FunctionRecord>,
}

/// A single documented function.
#[derive(Debug, Default, Deserialize)]
pub struct FunctionRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub signature: Signature,
    #[serde(default, deserialize_with = "nullable")]
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct Signature {
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            name: unknown_name(),
        }
    }
}

/// Parsed doc comment.
#[derive(Debug, Default, Deserialize)]
pub struct Comment {
    /// Free text, may contain fenced example blocks
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub arguments: Vec<Argument>,
}

/// A documented parameter.
#[derive(Debug, Default, Deserialize)]
pub struct Argument {
    /// Unnamed arguments are left out of the page
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub types: Vec<String>,
    /// Raw default as written in the source, e.g. "= (0, 0)" or "null"
    #[serde(default, rename = "default-value")]
    pub default_value: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
}

/// Normalized view of [`Argument::default_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue<'a> {
    Absent,
    /// The literal `null`; rendered as an explicit `undefined`.
    Undefined,
    Value(&'a str),
}

impl FunctionRecord {
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Functions starting with `_` stay out of combined pages.
    pub fn is_private(&self) -> bool {
        self.name().starts_with('_')
    }

    /// Arguments that carry a name, in declaration order.
    pub fn named_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.comment.arguments.iter().filter(|a| !a.name.is_empty())
    }
}

impl Argument {
    /// Comma-joined type list, e.g. "int,float".
    pub fn types_joined(&self) -> String {
        self.types.join(",")
    }

    pub fn default_value(&self) -> DefaultValue<'_> {
        let Some(raw) = self.default_value.as_deref() else {
            return DefaultValue::Absent;
        };
        match raw.strip_prefix("= ").unwrap_or(raw) {
            "" => DefaultValue::Absent,
            "null" => DefaultValue::Undefined,
            value => DefaultValue::Value(value),
        }
    }
}

fn unknown_name() -> String {
    "unknown".to_string()
}

/// Treat an explicit JSON `null` like a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn name_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|n| n.unwrap_or_else(unknown_name))
}
