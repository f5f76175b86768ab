//! The `generate` command: document source in, MDX page out.

use std::fs;

use moondoc_core::document::Document;
use moondoc_docs::lint;
use moondoc_docs::mdx::page::generate_page;

use crate::cli::args::GenerateArgs;
use crate::cli::commands::load_registry;
use crate::error::MoondocError;

/// Execute `generate`.
///
/// Loads the document source, renders it to MDX, lints the rendered
/// page against the site registry, and writes the output file (or
/// prints to stdout). Lint errors abort before anything is written;
/// `--strict` promotes warnings to errors.
///
/// # Errors
///
/// Returns an error if loading, rendering, or writing fails, or if the
/// rendered page has lint errors.
pub fn run(args: &GenerateArgs) -> Result<(), MoondocError> {
    tracing::info!(source = %args.source.display(), "loading document source");
    let doc = Document::from_file(&args.source)?;
    let registry = load_registry(&args.registry)?;

    let page = generate_page(&doc)?;

    let report = lint::lint_page(&page, &registry);
    for finding in &report.findings {
        eprintln!("{finding}");
    }

    let mut errors = report.error_count();
    if args.strict {
        errors += report.warning_count();
    }
    if errors > 0 {
        return Err(MoondocError::Lint { errors });
    }

    if args.stdout {
        print!("{page}");
    } else {
        if let Some(parent) = args.output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&args.output, &page)?;
        eprintln!("Wrote {}", args.output.display());
    }

    tracing::debug!(
        sections = doc.sections.len(),
        bytes = page.len(),
        "page rendered"
    );
    Ok(())
}
