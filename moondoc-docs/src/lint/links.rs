//! Internal link resolution check.
//!
//! Internal links are site-absolute paths and must resolve against the
//! site page registry. Outbound `http(s)` and `mailto:` links are inert
//! text and are not checked. Lines inside code fences are ignored.

use std::sync::LazyLock;

use regex::Regex;

use super::fences::FenceScan;
use super::{Finding, Rule, Severity};
use crate::registry::SiteRegistry;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("link regex is valid")
});

/// Check every link in a page against the site registry.
#[must_use]
pub fn check(mdx: &str, scan: &FenceScan, registry: &SiteRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (i, line) in mdx.lines().enumerate() {
        let line_no = i + 1;
        if scan.is_fenced(line_no) {
            continue;
        }

        for captures in LINK_RE.captures_iter(line) {
            let whole = captures.get(0).expect("capture 0 always present");
            // Skip image syntax: ![alt](src)
            if whole.start() > 0 && line.as_bytes()[whole.start() - 1] == b'!' {
                continue;
            }

            let target = captures[2].trim();
            if is_outbound(target) || target.starts_with('#') {
                continue;
            }

            if target.starts_with('/') {
                if !registry.resolves(target) {
                    findings.push(Finding {
                        line: line_no,
                        rule: Rule::Link,
                        message: format!(
                            "internal link `{target}` does not resolve to a site page"
                        ),
                        severity: Severity::Error,
                    });
                }
            } else {
                findings.push(Finding {
                    line: line_no,
                    rule: Rule::Link,
                    message: format!("relative link target `{target}` cannot be resolved"),
                    severity: Severity::Warning,
                });
            }
        }
    }

    findings
}

/// Whether a link target leaves the site.
fn is_outbound(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}
