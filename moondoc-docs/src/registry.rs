//! Site page registry.
//!
//! The registry (`site.yaml`) lists every page path that exists in the
//! broader documentation site. Internal links in rendered pages are
//! resolved against it; a link to a path not in the registry is a broken
//! link even if the markup around it is well-formed.

use serde::Deserialize;

use crate::error::DocsError;

/// Parsed site registry.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRegistry {
    /// Site-level configuration.
    pub site: SiteInfo,

    /// Pages that exist in the site, in sidebar order.
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// Site-level configuration from the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Base URL the site is served under.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// A single page known to the site.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    /// Site-absolute page path, e.g. `/tutorial/metamethods`.
    pub path: String,

    /// Human-readable page title.
    pub title: String,
}

/// Parse a registry YAML file.
///
/// # Errors
///
/// Returns `DocsError::Yaml` if the content cannot be parsed.
pub fn parse_registry(content: &str) -> Result<SiteRegistry, DocsError> {
    let registry: SiteRegistry = serde_yaml::from_str(content)?;
    Ok(registry)
}

impl SiteRegistry {
    /// Whether an internal link target resolves to a known page.
    ///
    /// Fragments and trailing slashes are ignored, so `/tutorial/oop/`
    /// and `/tutorial/oop#inheritance` both resolve against
    /// `/tutorial/oop`.
    #[must_use]
    pub fn resolves(&self, target: &str) -> bool {
        let wanted = normalize_path(target);
        self.pages.iter().any(|p| normalize_path(&p.path) == wanted)
    }
}

/// Normalize a site path for comparison.
fn normalize_path(path: &str) -> String {
    let without_fragment = path.split('#').next().unwrap_or(path);
    let trimmed = without_fragment.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> SiteRegistry {
        let yaml = r"
site:
  title: Lua Tutorials
  description: Hands-on guides to the Lua language
  base_url: /docs

pages:
  - path: /tutorial/metamethods
    title: Metamethods
  - path: /tutorial/oop
    title: Object-Oriented Programming
";
        parse_registry(yaml).unwrap()
    }

    #[test]
    fn test_parse_registry() {
        let reg = sample_registry();
        assert_eq!(reg.site.title, "Lua Tutorials");
        assert_eq!(reg.pages.len(), 2);
        assert_eq!(reg.pages[1].path, "/tutorial/oop");
    }

    #[test]
    fn test_resolves_exact_path() {
        let reg = sample_registry();
        assert!(reg.resolves("/tutorial/oop"));
        assert!(!reg.resolves("/tutorial/coroutines"));
    }

    #[test]
    fn test_resolves_with_fragment() {
        let reg = sample_registry();
        assert!(reg.resolves("/tutorial/oop#inheritance"));
    }

    #[test]
    fn test_resolves_trailing_slash() {
        let reg = sample_registry();
        assert!(reg.resolves("/tutorial/oop/"));
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/#top"), "/");
    }

    #[test]
    fn test_empty_pages_resolves_nothing() {
        let yaml = r"
site:
  title: Empty
  description: No pages yet
";
        let reg = parse_registry(yaml).unwrap();
        assert!(!reg.resolves("/anything"));
    }
}
