//! Code fence scanning.
//!
//! Pairs opening and closing fences, records each fenced region
//! byte-exactly, and exposes a per-line mask so the other checks can
//! skip fence bodies. Fence bodies are opaque text; nothing here ever
//! interprets them.

use super::{Finding, Rule, Severity};

/// One fenced code block found in a page.
#[derive(Debug, Clone)]
pub struct FencedBlock {
    /// 1-based line of the opening fence.
    pub open_line: usize,
    /// 1-based line of the closing fence.
    pub close_line: usize,
    /// Full info string after the opening backticks.
    pub info: String,
    /// First token of the info string, if any.
    pub language: Option<String>,
    /// Exact text of the region, opening fence through closing fence.
    pub raw: String,
}

/// Result of scanning a page for fences.
#[derive(Debug)]
pub struct FenceScan {
    /// All properly closed fenced blocks, in order.
    pub blocks: Vec<FencedBlock>,
    /// 1-based line of an opening fence that was never closed.
    pub unterminated: Option<usize>,
    fenced: Vec<bool>,
}

impl FenceScan {
    /// Whether a 1-based line lies inside a fenced region
    /// (delimiter lines included).
    #[must_use]
    pub fn is_fenced(&self, line_no: usize) -> bool {
        line_no
            .checked_sub(1)
            .and_then(|i| self.fenced.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// The fenced regions, byte-exact, in page order.
    ///
    /// Re-serializing these and extracting again yields identical text,
    /// which is the round-trip guarantee the content format promises.
    #[must_use]
    pub fn fenced_regions(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.raw.as_str()).collect()
    }
}

/// Scan a page for fenced code blocks.
#[must_use]
pub fn scan(mdx: &str) -> FenceScan {
    let lines: Vec<&str> = mdx.lines().collect();
    let mut fenced = vec![false; lines.len()];
    let mut blocks = Vec::new();
    let mut open: Option<(usize, String)> = None;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();

        if let Some((open_idx, info)) = open.take() {
            fenced[i] = true;
            if trimmed.trim_end() == "```" {
                blocks.push(FencedBlock {
                    open_line: open_idx + 1,
                    close_line: i + 1,
                    language: parse_language(&info),
                    info,
                    raw: lines[open_idx..=i].join("\n"),
                });
            } else {
                open = Some((open_idx, info));
            }
        } else if let Some(rest) = trimmed.strip_prefix("```") {
            fenced[i] = true;
            open = Some((i, rest.trim().to_string()));
        }
    }

    FenceScan {
        blocks,
        unterminated: open.map(|(i, _)| i + 1),
        fenced,
    }
}

/// Check fence pairing and language tags.
#[must_use]
pub fn check(scan: &FenceScan, allowed_languages: &[&str]) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(line) = scan.unterminated {
        findings.push(Finding {
            line,
            rule: Rule::Fence,
            message: "unterminated code fence".to_string(),
            severity: Severity::Error,
        });
    }

    for block in &scan.blocks {
        match block.language.as_deref() {
            None => findings.push(Finding {
                line: block.open_line,
                rule: Rule::Fence,
                message: "code fence has no language tag".to_string(),
                severity: Severity::Warning,
            }),
            Some(lang) if !allowed_languages.contains(&lang) => findings.push(Finding {
                line: block.open_line,
                rule: Rule::Fence,
                message: format!("unexpected code fence language `{lang}`"),
                severity: Severity::Error,
            }),
            Some(_) => {}
        }
    }

    findings
}

/// First whitespace-separated token of a fence info string.
fn parse_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LUA_ONLY: &[&str] = &["lua"];

    #[test]
    fn test_scan_single_block() {
        let mdx = "intro\n```lua title=\"vector.lua\"\nprint(1)\n```\noutro\n";
        let scan = scan(mdx);
        assert_eq!(scan.blocks.len(), 1);
        assert_eq!(scan.unterminated, None);

        let block = &scan.blocks[0];
        assert_eq!(block.open_line, 2);
        assert_eq!(block.close_line, 4);
        assert_eq!(block.language.as_deref(), Some("lua"));
        assert_eq!(block.raw, "```lua title=\"vector.lua\"\nprint(1)\n```");
    }

    #[test]
    fn test_fence_mask() {
        let mdx = "prose\n```lua\nbody\n```\nprose\n";
        let scan = scan(mdx);
        assert!(!scan.is_fenced(1));
        assert!(scan.is_fenced(2));
        assert!(scan.is_fenced(3));
        assert!(scan.is_fenced(4));
        assert!(!scan.is_fenced(5));
        assert!(!scan.is_fenced(99));
    }

    #[test]
    fn test_unterminated_fence() {
        let mdx = "```lua\nnever closed\n";
        let scan = scan(mdx);
        assert_eq!(scan.blocks.len(), 0);
        assert_eq!(scan.unterminated, Some(1));

        let findings = check(&scan, LUA_ONLY);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("unterminated"));
    }

    #[test]
    fn test_language_allowlist() {
        let mdx = "```sh\necho hi\n```\n";
        let findings = check(&scan(mdx), LUA_ONLY);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("`sh`"));
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_missing_language_is_warning() {
        let mdx = "```\nplain\n```\n";
        let findings = check(&scan(mdx), LUA_ONLY);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_heading_like_body_stays_fenced() {
        let mdx = "```lua\n# not a heading\n| not | a table |\n```\n";
        let scan = scan(mdx);
        assert_eq!(scan.blocks.len(), 1);
        assert!(scan.is_fenced(2));
        assert!(scan.is_fenced(3));
    }

    #[test]
    fn test_fenced_regions_round_trip() {
        let mdx = "a\n```lua\nx = 1\n```\nb\n```lua\ny = 2\n```\n";
        let first = scan(mdx);
        let regions = first.fenced_regions();

        // Re-serialize the regions and extract again.
        let reserialized = regions.join("\n\n");
        let second = scan(&reserialized);
        let again = second.fenced_regions();
        assert_eq!(regions, again);
    }

    proptest! {
        #[test]
        fn prop_fence_regions_survive_round_trip(
            bodies in prop::collection::vec(
                prop::collection::vec("[a-zA-Z0-9 .()_=-]{0,30}", 1..5),
                1..5,
            ),
            prose in "[a-zA-Z .]{0,30}",
        ) {
            let mut lines = Vec::new();
            for body in &bodies {
                lines.push(prose.clone());
                lines.push("```lua".to_string());
                lines.extend(body.iter().cloned());
                lines.push("```".to_string());
            }
            let mdx = lines.join("\n");

            let first = scan(&mdx);
            prop_assert_eq!(first.unterminated, None);
            prop_assert_eq!(first.blocks.len(), bodies.len());

            let regions: Vec<String> =
                first.fenced_regions().iter().map(ToString::to_string).collect();
            let reserialized = regions.join("\n\n");
            let second = scan(&reserialized);
            let again: Vec<String> =
                second.fenced_regions().iter().map(ToString::to_string).collect();
            prop_assert_eq!(regions, again);
        }
    }
}
