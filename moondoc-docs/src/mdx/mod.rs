//! MDX page generation.
//!
//! Converts an authored document into an MDX page with:
//! - YAML frontmatter for the site framework
//! - Markdown headings, prose, and admonition callouts
//! - Fenced code samples with display filename hints
//! - Markdown reference tables

pub mod frontmatter;
pub mod page;
