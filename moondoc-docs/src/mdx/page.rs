//! Full MDX page assembly.
//!
//! Renders a document into a complete MDX page, section by section.
//! Rendering is deterministic given the same input, and refuses any
//! input that would produce malformed markup (the one obligation the
//! artifact has toward the external site renderer).

use moondoc_core::document::{Block, Callout, CodeSample, Document, ReferenceTable};

use crate::error::DocsError;
use crate::mdx::frontmatter::generate_frontmatter;

/// Generate a complete MDX page for a document.
///
/// Returns the MDX content as a string, frontmatter first, then the
/// auto-generated banner, the h1 title, and each section in order.
///
/// # Errors
///
/// Returns `DocsError::Render` if a code sample body would break its
/// own fence or a table row does not match its header width.
pub fn generate_page(doc: &Document) -> Result<String, DocsError> {
    let mut sections = Vec::new();

    // Frontmatter must be first in MDX files
    sections.push(generate_frontmatter(&doc.page));
    sections.push(String::new());

    sections.push("<!-- AUTO-GENERATED — DO NOT EDIT -->".to_string());
    sections.push(String::new());

    sections.push(format!("# {}", doc.page.title));
    sections.push(String::new());

    for section in &doc.sections {
        let depth = usize::from(section.level.clamp(2, 6));
        sections.push(format!("{} {}", "#".repeat(depth), section.heading));
        sections.push(String::new());

        for block in &section.blocks {
            match block {
                Block::Prose(text) => {
                    sections.push(text.trim_end().to_string());
                    sections.push(String::new());
                }
                Block::Callout(callout) => {
                    render_callout(&mut sections, callout);
                }
                Block::Code(sample) => {
                    render_code(&mut sections, sample)?;
                }
                Block::Table(table) => {
                    render_table(&mut sections, table)?;
                }
            }
        }
    }

    // Each block leaves one trailing blank line; joining yields a
    // single trailing newline at end of file.
    Ok(sections.join("\n"))
}

/// Render an admonition callout block.
fn render_callout(sections: &mut Vec<String>, callout: &Callout) {
    let opener = callout.title.as_ref().map_or_else(
        || format!(":::{}", callout.style.keyword()),
        |title| format!(":::{} {title}", callout.style.keyword()),
    );
    sections.push(opener);
    sections.push(callout.text.trim_end().to_string());
    sections.push(":::".to_string());
    sections.push(String::new());
}

/// Render a fenced code sample.
fn render_code(sections: &mut Vec<String>, sample: &CodeSample) -> Result<(), DocsError> {
    let body = sample.body.trim_end_matches('\n');

    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            return Err(DocsError::Render(format!(
                "code sample {} contains a fence line and would break its own fence",
                sample.file.as_deref().unwrap_or("<unnamed>")
            )));
        }
    }

    let opener = sample.file.as_ref().map_or_else(
        || format!("```{}", sample.language),
        |file| format!("```{} title=\"{file}\"", sample.language),
    );
    sections.push(opener);
    for line in body.lines() {
        sections.push(line.to_string());
    }
    sections.push("```".to_string());
    sections.push(String::new());
    Ok(())
}

/// Render a markdown reference table.
fn render_table(sections: &mut Vec<String>, table: &ReferenceTable) -> Result<(), DocsError> {
    let width = table.columns.len();
    if width == 0 {
        return Err(DocsError::Render("table has no columns".to_string()));
    }

    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(DocsError::Render(format!(
                "table row {} has {} cell(s), expected {width}",
                i + 1,
                row.len()
            )));
        }
    }

    sections.push(format_row(&table.columns));
    sections.push(format!("|{}", " --- |".repeat(width)));
    for row in &table.rows {
        sections.push(format_row(row));
    }
    sections.push(String::new());
    Ok(())
}

/// Format a table row with cell escaping.
fn format_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", escaped.join(" | "))
}
