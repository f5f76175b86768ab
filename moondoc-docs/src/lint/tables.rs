//! Table shape and row-uniqueness check.
//!
//! A markdown table is a run of contiguous `|` lines: header, separator,
//! then data rows. Every row must have the header's column count, and
//! first-column keys must be unique (the reference table is keyed by
//! metamethod name).

use std::collections::HashMap;

use super::fences::FenceScan;
use super::{Finding, Rule, Severity};

/// Check every table in a page.
#[must_use]
pub fn check(mdx: &str, scan: &FenceScan) -> Vec<Finding> {
    let mut findings = Vec::new();
    let lines: Vec<&str> = mdx.lines().collect();

    let mut i = 0;
    while i < lines.len() {
        let line_no = i + 1;
        if !scan.is_fenced(line_no) && is_table_line(lines[i]) {
            let start = i;
            while i < lines.len() && !scan.is_fenced(i + 1) && is_table_line(lines[i]) {
                i += 1;
            }
            check_table(&lines[start..i], start + 1, &mut findings);
        } else {
            i += 1;
        }
    }

    findings
}

/// Check a single table run. `first_line` is 1-based.
fn check_table(rows: &[&str], first_line: usize, findings: &mut Vec<Finding>) {
    if rows.len() < 2 || !is_separator_row(rows[1]) {
        findings.push(Finding {
            line: first_line,
            rule: Rule::Table,
            message: "table is missing its separator row".to_string(),
            severity: Severity::Error,
        });
        return;
    }

    let width = split_row(rows[0]).len();
    let mut seen_keys: HashMap<String, usize> = HashMap::new();

    for (offset, row) in rows.iter().enumerate().skip(1) {
        let line_no = first_line + offset;
        let cells = split_row(row);

        if cells.len() != width {
            findings.push(Finding {
                line: line_no,
                rule: Rule::Table,
                message: format!("table row has {} cell(s), expected {width}", cells.len()),
                severity: Severity::Error,
            });
        }

        // Separator row carries no key.
        if offset == 1 {
            continue;
        }

        if let Some(key) = cells.first() {
            let normalized = key.trim_matches('`').to_string();
            if let Some(first_seen) = seen_keys.get(&normalized) {
                findings.push(Finding {
                    line: line_no,
                    rule: Rule::Table,
                    message: format!(
                        "duplicate table row key `{normalized}`, first seen at line {first_seen}"
                    ),
                    severity: Severity::Error,
                });
            } else {
                seen_keys.insert(normalized, line_no);
            }
        }
    }
}

/// Whether a line belongs to a table run.
fn is_table_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Whether a line is a table separator row (`| --- | --- |`).
fn is_separator_row(line: &str) -> bool {
    let cells = split_row(line);
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let stripped = cell
                .trim()
                .trim_start_matches(':')
                .trim_end_matches(':');
            !stripped.is_empty() && stripped.chars().all(|c| c == '-')
        })
}

/// Split a table line into trimmed cells, honoring escaped pipes.
fn split_row(line: &str) -> Vec<String> {
    const ESCAPED_PIPE: char = '\u{1}';

    let unescaped = line.trim().replace("\\|", &ESCAPED_PIPE.to_string());
    let mut inner = unescaped.as_str();
    inner = inner.strip_prefix('|').unwrap_or(inner);
    inner = inner.strip_suffix('|').unwrap_or(inner);

    inner
        .split('|')
        .map(|cell| cell.trim().replace(ESCAPED_PIPE, "|"))
        .collect()
}
