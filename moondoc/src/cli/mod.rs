//! Command-line interface for moondoc.

pub mod args;
pub mod commands;
