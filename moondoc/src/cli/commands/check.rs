//! The `check` command: lint rendered MDX pages.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use moondoc_docs::lint::{self, LintReport};

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::cli::commands::load_registry;
use crate::error::MoondocError;

/// Per-file lint results for JSON output.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    report: LintReport,
}

/// Execute `check`.
///
/// Lints each file against the site registry. Error-severity findings
/// always fail the command; `--strict` promotes warnings to errors.
///
/// # Errors
///
/// Returns an error if a file cannot be read or any page has lint
/// errors.
pub fn run(args: &CheckArgs) -> Result<(), MoondocError> {
    let registry = load_registry(&args.registry)?;

    let mut error_count = 0;
    let mut warning_count = 0;
    let mut file_reports = Vec::new();

    for file in &args.files {
        let mdx = fs::read_to_string(file).map_err(|e| {
            MoondocError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", file.display()),
            ))
        })?;

        let report = lint::lint_page(&mdx, &registry);

        error_count += report.error_count();
        if args.strict {
            error_count += report.warning_count();
        } else {
            warning_count += report.warning_count();
        }

        if args.format == OutputFormat::Human {
            for finding in &report.findings {
                eprintln!("{}: {finding}", file.display());
            }
        }

        file_reports.push(FileReport {
            path: file.clone(),
            report,
        });
    }

    match args.format {
        OutputFormat::Human => {
            if error_count > 0 {
                eprintln!("\n{error_count} error(s) found");
            } else if warning_count > 0 {
                eprintln!("Check passed ({warning_count} warning(s))");
            } else {
                eprintln!("Check passed");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&file_reports)?);
        }
    }

    if error_count > 0 {
        return Err(MoondocError::Lint {
            errors: error_count,
        });
    }

    Ok(())
}
