//! `moondoc-core` — document schema for the moondoc content pipeline
//!
//! Defines the structured source format that tutorial pages are authored
//! in: page metadata, ordered sections, and content blocks (prose,
//! callouts, code samples, reference tables).

pub mod document;
pub mod error;
