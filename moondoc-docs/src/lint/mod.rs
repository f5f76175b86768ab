//! Content-integrity lint for rendered MDX pages.
//!
//! A page that fails any of these checks would mis-render (or fail to
//! render) in the external site framework. Checks are line-based over
//! the rendered text; lines inside code fences are exempt from markup
//! checks since fence bodies are opaque.

pub mod fences;
pub mod headings;
pub mod links;
pub mod tables;

use serde::Serialize;

use crate::registry::SiteRegistry;

/// Language tags permitted on code fences.
///
/// The tutorial embeds illustrative Lua only; anything else (a shell
/// tag, a test-harness tag) is an authoring mistake.
pub const ALLOWED_LANGUAGES: &[&str] = &["lua"];

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Would mis-render or violates a content invariant.
    Error,
    /// Suspicious but renderable.
    Warning,
}

/// Which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Fence pairing and language tags.
    Fence,
    /// Heading hierarchy.
    Heading,
    /// Table shape and row uniqueness.
    Table,
    /// Internal link resolution.
    Link,
}

/// A single lint finding with line context.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// 1-based line number in the checked file.
    pub line: usize,
    /// The check that fired.
    pub rule: Rule,
    /// Human-readable message.
    pub message: String,
    /// Finding severity.
    pub severity: Severity,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} (line {})", prefix, self.message, self.line)
    }
}

/// Accumulated findings for one page.
#[derive(Debug, Default, Serialize)]
pub struct LintReport {
    /// All findings in line order.
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// Number of error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings.len() - self.error_count()
    }

    /// Returns `true` if there are no findings at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run every check over a rendered MDX page.
///
/// Internal links are resolved against `registry`. Findings are
/// returned in line order.
#[must_use]
pub fn lint_page(mdx: &str, registry: &SiteRegistry) -> LintReport {
    let scan = fences::scan(mdx);

    let mut findings = fences::check(&scan, ALLOWED_LANGUAGES);
    findings.extend(headings::check(mdx, &scan));
    findings.extend(tables::check(mdx, &scan));
    findings.extend(links::check(mdx, &scan, registry));

    findings.sort_by_key(|f| f.line);
    LintReport { findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_registry;

    fn test_registry() -> SiteRegistry {
        parse_registry(
            r"
site:
  title: Test
  description: Test site
pages:
  - path: /tutorial/oop
    title: OOP
",
        )
        .unwrap()
    }

    #[test]
    fn test_clean_page() {
        let mdx = "\
# Title

## Section

Some prose with an [internal link](/tutorial/oop).

```lua
print(\"hello\")
```

| Name | Description |
| --- | --- |
| `__add` | addition |
| `__sub` | subtraction |
";
        let report = lint_page(mdx, &test_registry());
        assert!(report.is_clean(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_dirty_page_accumulates() {
        let mdx = "\
# Title

### Skipped level

[broken](/nowhere)

```sh
echo hi
```
";
        let report = lint_page(mdx, &test_registry());
        assert!(report.error_count() >= 3, "findings: {:?}", report.findings);
    }

    #[test]
    fn test_findings_sorted_by_line() {
        let mdx = "\
# Title

[broken](/nowhere)

### Skip
";
        let report = lint_page(mdx, &test_registry());
        let lines: Vec<_> = report.findings.iter().map(|f| f.line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn test_report_counts() {
        let report = LintReport {
            findings: vec![
                Finding {
                    line: 1,
                    rule: Rule::Fence,
                    message: "x".to_string(),
                    severity: Severity::Error,
                },
                Finding {
                    line: 2,
                    rule: Rule::Link,
                    message: "y".to_string(),
                    severity: Severity::Warning,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding {
            line: 12,
            rule: Rule::Heading,
            message: "heading level jumps from h1 to h3".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            finding.to_string(),
            "error: heading level jumps from h1 to h3 (line 12)"
        );
    }
}
