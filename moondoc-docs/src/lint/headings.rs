//! Heading hierarchy check.
//!
//! Heading levels must not skip: each heading may be at most one level
//! deeper than the heading before it, and the first heading of the body
//! must be an h1. Lines inside code fences are ignored.

use super::fences::FenceScan;
use super::{Finding, Rule, Severity};

/// Check the heading hierarchy of a page.
#[must_use]
pub fn check(mdx: &str, scan: &FenceScan) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut prev_level: usize = 0;
    let mut seen_h1 = false;

    for (i, line) in mdx.lines().enumerate() {
        let line_no = i + 1;
        if scan.is_fenced(line_no) {
            continue;
        }

        let Some(level) = heading_level(line) else {
            continue;
        };

        if prev_level == 0 && level > 1 {
            findings.push(Finding {
                line: line_no,
                rule: Rule::Heading,
                message: format!("first heading is h{level}, expected h1"),
                severity: Severity::Error,
            });
        } else if level > prev_level + 1 {
            findings.push(Finding {
                line: line_no,
                rule: Rule::Heading,
                message: format!("heading level jumps from h{prev_level} to h{level}"),
                severity: Severity::Error,
            });
        }

        if level == 1 {
            if seen_h1 {
                findings.push(Finding {
                    line: line_no,
                    rule: Rule::Heading,
                    message: "multiple h1 headings".to_string(),
                    severity: Severity::Warning,
                });
            }
            seen_h1 = true;
        }

        prev_level = level;
    }

    findings
}

/// ATX heading level of a line, if it is a heading.
fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    // A heading needs a space between the hashes and the text.
    line[hashes..].starts_with(' ').then_some(hashes)
}
