//! Document source schema.
//!
//! A document is the single authored artifact of the site: page metadata
//! plus an ordered list of sections, each holding an ordered list of
//! content blocks. The schema is deserialized from YAML; code sample
//! bodies are opaque text and are never interpreted.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DocumentError;

/// A complete authored document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Page-level metadata (frontmatter source).
    pub page: PageMeta,

    /// Ordered sections of the page body.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Page metadata rendered into MDX frontmatter.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Stable page identifier (used in URLs).
    pub id: String,

    /// Page title (also the top-level heading).
    pub title: String,

    /// Sidebar label; falls back to the title when absent.
    #[serde(default)]
    pub sidebar_label: Option<String>,

    /// One-line page description.
    #[serde(default)]
    pub description: Option<String>,

    /// Frontmatter tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Date of the last content revision.
    #[serde(default)]
    pub updated: Option<NaiveDate>,
}

/// One section of the page body.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Section heading text.
    pub heading: String,

    /// Heading depth. 2 renders as `##`; the page title is the only h1.
    #[serde(default = "default_level")]
    pub level: u8,

    /// Ordered content blocks. Each YAML list item is a single-key map
    /// naming the block kind, so `singleton_map_recursive` rather than
    /// serde_yaml's default `!tag` representation.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub blocks: Vec<Block>,
}

const fn default_level() -> u8 {
    2
}

/// A single content block within a section.
///
/// Each YAML list item is a single-key map naming its kind:
/// `- prose: …`, `- code: …`, `- callout: …`, `- table: …`.
/// Deserialized via `singleton_map_recursive` on [`Section::blocks`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// One or more markdown paragraphs.
    Prose(String),

    /// A highlighted admonition block.
    Callout(Callout),

    /// A fenced, illustrative code sample. Never executed.
    Code(CodeSample),

    /// A reference table keyed by its first column.
    Table(ReferenceTable),
}

/// An admonition callout.
#[derive(Debug, Clone, Deserialize)]
pub struct Callout {
    /// Visual style of the callout.
    #[serde(default)]
    pub style: CalloutStyle,

    /// Optional callout title.
    #[serde(default)]
    pub title: Option<String>,

    /// Callout body text.
    pub text: String,
}

/// Admonition styles supported by the site renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutStyle {
    /// Neutral note.
    #[default]
    Note,
    /// Helpful tip.
    Tip,
    /// Informational aside.
    Info,
    /// Warning.
    Warning,
}

impl CalloutStyle {
    /// The admonition keyword used in markup.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A fenced code sample with a display filename hint.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSample {
    /// Illustrative filename shown above the block (e.g. `vector.lua`).
    #[serde(default)]
    pub file: Option<String>,

    /// Fence language tag.
    #[serde(default = "default_language")]
    pub language: String,

    /// Opaque sample body.
    pub body: String,
}

fn default_language() -> String {
    "lua".to_string()
}

/// A markdown reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTable {
    /// Column headers.
    pub columns: Vec<String>,

    /// Table rows; the first cell is the row key.
    pub rows: Vec<Vec<String>>,
}

impl ReferenceTable {
    /// Row keys (first cell of each row) in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(|row| row.first().map(String::as_str))
    }

    /// Keys that appear more than once, each reported once.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for key in self.keys() {
            if !seen.insert(key) && !dups.contains(&key) {
                dups.push(key);
            }
        }
        dups
    }
}

impl Document {
    /// Parse a document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Yaml` if deserialization fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a document from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Io` if the file cannot be read and
    /// `DocumentError::Parse` (with path context) if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let yaml = fs::read_to_string(path)?;
        serde_yaml::from_str(&yaml).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// All reference tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &ReferenceTable> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
    }

    /// All code samples in document order.
    pub fn code_samples(&self) -> impl Iterator<Item = &CodeSample> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Block::Code(c) => Some(c),
                _ => None,
            })
    }
}
