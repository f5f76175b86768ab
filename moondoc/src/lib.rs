//! `moondoc` - content pipeline for the Lua tutorial site
//!
//! Renders authored YAML documents to MDX pages and lints rendered
//! markup for the defects the external site renderer cannot tolerate.

pub mod cli;
pub mod error;
pub mod observability;
