//! `moondoc-docs` — MDX rendering and content-integrity lint
//!
//! Renders authored documents to MDX pages and checks rendered markup
//! for the defects an external site renderer would choke on: unclosed
//! code fences, malformed tables, skipped heading levels, and internal
//! links that do not resolve within the site.

pub mod error;
pub mod lint;
pub mod mdx;
pub mod registry;
