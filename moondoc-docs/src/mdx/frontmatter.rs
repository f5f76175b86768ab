//! YAML frontmatter generation for MDX pages.

use moondoc_core::document::PageMeta;

/// Generate YAML frontmatter from page metadata.
///
/// Produces frontmatter with `id`, `title`, `sidebar_label`, and the
/// optional `description`, `tags`, and `updated` fields.
#[must_use]
pub fn generate_frontmatter(meta: &PageMeta) -> String {
    let mut lines = Vec::new();
    lines.push("---".to_string());
    lines.push(format!("id: {}", meta.id));
    lines.push(format!("title: {}", quote_yaml_string(&meta.title)));

    let sidebar = meta.sidebar_label.as_deref().unwrap_or(&meta.title);
    lines.push(format!("sidebar_label: {}", quote_yaml_string(sidebar)));

    if let Some(ref description) = meta.description {
        lines.push(format!("description: {}", quote_yaml_string(description)));
    }

    if !meta.tags.is_empty() {
        lines.push("tags:".to_string());
        for tag in &meta.tags {
            lines.push(format!("  - {tag}"));
        }
    }

    if let Some(updated) = meta.updated {
        lines.push(format!("updated: {}", updated.format("%Y-%m-%d")));
    }

    lines.push("---".to_string());
    lines.join("\n")
}

/// Quote a YAML string value if it contains special characters.
fn quote_yaml_string(s: &str) -> String {
    if s.contains(':') || s.contains('#') || s.contains('"') || s.starts_with(' ') {
        let escaped = s.replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn minimal_meta() -> PageMeta {
        PageMeta {
            id: "metamethods".to_string(),
            title: "Metamethods".to_string(),
            sidebar_label: None,
            description: Some("Hooks for operators and table access".to_string()),
            tags: vec!["lua".to_string(), "tutorial".to_string()],
            updated: None,
        }
    }

    #[test]
    fn test_basic_frontmatter() {
        let fm = generate_frontmatter(&minimal_meta());
        assert!(fm.starts_with("---"));
        assert!(fm.ends_with("---"));
        assert!(fm.contains("id: metamethods"));
        assert!(fm.contains("title: Metamethods"));
        assert!(fm.contains("sidebar_label: Metamethods"));
        assert!(fm.contains("description: Hooks for operators and table access"));
    }

    #[test]
    fn test_frontmatter_tags() {
        let fm = generate_frontmatter(&minimal_meta());
        assert!(fm.contains("tags:"));
        assert!(fm.contains("  - lua"));
        assert!(fm.contains("  - tutorial"));
    }

    #[test]
    fn test_frontmatter_no_tags() {
        let mut meta = minimal_meta();
        meta.tags.clear();
        let fm = generate_frontmatter(&meta);
        assert!(!fm.contains("tags:"));
    }

    #[test]
    fn test_explicit_sidebar_label() {
        let mut meta = minimal_meta();
        meta.sidebar_label = Some("Metamethods in Lua".to_string());
        let fm = generate_frontmatter(&meta);
        assert!(fm.contains("sidebar_label: Metamethods in Lua"));
    }

    #[test]
    fn test_updated_date() {
        let mut meta = minimal_meta();
        meta.updated = NaiveDate::from_ymd_opt(2026, 8, 1);
        let fm = generate_frontmatter(&meta);
        assert!(fm.contains("updated: 2026-08-01"));
    }

    #[test]
    fn test_quote_special_chars() {
        assert_eq!(
            quote_yaml_string("Metamethods: the basics"),
            "\"Metamethods: the basics\""
        );
        assert_eq!(quote_yaml_string("Plain Title"), "Plain Title");
    }
}
