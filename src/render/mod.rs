//! MDX page rendering.

pub mod combined;
pub mod page;

/// File extension of every generated page.
pub const EXTENSION: &str = "mdx";
