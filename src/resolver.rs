//! Resolution of free-form technology names to catalog identifiers.
//!
//! Matching runs in three stages and stops at the first hit:
//!
//! 1. **Direct**: the normalized name is a catalog identifier.
//! 2. **Alias**: the first alias rule listing the normalized name.
//! 3. **Fallback**: the first catalog entry (in catalog order) whose display
//!    name or one of whose tags contains the normalized name.
//!
//! The fallback stage is a best-effort substring scan, not a ranked search.

use serde::Serialize;
use std::fmt;

use crate::aliases::AliasTable;
use crate::catalog::Catalog;

/// Default asset host: the devicon icon tree on jsDelivr.
pub const DEFAULT_ASSET_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Render variant used whenever an icon provides it.
pub const PREFERRED_VARIANT: &str = "original";

/// Stripped from both ends of a name along with Unicode whitespace
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Which stage produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    Direct,
    Alias,
    Fallback,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Direct => write!(f, "direct"),
            MatchKind::Alias => write!(f, "alias"),
            MatchKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// A resolved identifier together with the stage that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub identifier: &'a str,
    pub kind: MatchKind,
}

/// Resolves names against a catalog and alias table, and derives asset URLs
/// and display names for identifiers.
#[derive(Debug, Clone)]
pub struct NameResolver<'a> {
    catalog: &'a Catalog,
    aliases: &'a AliasTable,
    asset_base: String,
}

impl NameResolver<'static> {
    /// Resolver over the embedded catalog and alias rules.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), AliasTable::builtin())
    }
}

impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a Catalog, aliases: &'a AliasTable) -> Self {
        Self {
            catalog,
            aliases,
            asset_base: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }

    /// Use a different asset host. Trailing `/` characters are dropped.
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.asset_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn aliases(&self) -> &'a AliasTable {
        self.aliases
    }

    /// Resolve a raw name, reporting which stage matched.
    ///
    /// Returns `None` for empty or whitespace-only input and when no stage
    /// matches.
    pub fn resolve(&self, raw_name: &str) -> Option<Resolution<'a>> {
        let lowered = raw_name.to_lowercase();
        let key = lowered.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if key.is_empty() {
            return None;
        }

        if let Some(entry) = self.catalog.get(key) {
            log::trace!("'{raw_name}' matched identifier '{key}' directly");
            return Some(Resolution {
                identifier: entry.identifier(),
                kind: MatchKind::Direct,
            });
        }

        if let Some(target) = self.aliases.lookup(key) {
            log::trace!("'{raw_name}' matched alias for '{target}'");
            return Some(Resolution {
                identifier: target,
                kind: MatchKind::Alias,
            });
        }

        let found = self.catalog.iter().find(|entry| entry.mentions(key));
        match found {
            Some(entry) => {
                log::debug!(
                    "'{raw_name}' resolved to '{}' by name/tag scan",
                    entry.identifier()
                );
                Some(Resolution {
                    identifier: entry.identifier(),
                    kind: MatchKind::Fallback,
                })
            }
            None => {
                log::debug!("No icon found for '{raw_name}'");
                None
            }
        }
    }

    /// Resolve a raw name to an identifier.
    pub fn resolve_identifier(&self, raw_name: &str) -> Option<&'a str> {
        self.resolve(raw_name).map(|resolution| resolution.identifier)
    }

    /// Like [`resolve_identifier`](Self::resolve_identifier), treating an
    /// absent name as no match.
    pub fn resolve_optional(&self, raw_name: Option<&str>) -> Option<&'a str> {
        raw_name.and_then(|name| self.resolve_identifier(name))
    }

    /// The render variant an asset URL would use: "original" if the icon has
    /// it, otherwise its first variant.
    pub fn select_variant(&self, identifier: &str) -> Option<&'a str> {
        let variants = self.catalog.get(identifier)?.render_variants();
        variants
            .iter()
            .find(|variant| variant.as_str() == PREFERRED_VARIANT)
            .or_else(|| variants.first())
            .map(String::as_str)
    }

    /// Build `{base}/{identifier}/{identifier}-{variant}.svg`.
    ///
    /// `identifier` must be an exact catalog key; nothing is normalized and
    /// nothing is fetched.
    pub fn build_asset_url(&self, identifier: &str) -> Option<String> {
        if identifier.is_empty() {
            return None;
        }
        let variant = self.select_variant(identifier)?;
        Some(format!("{}/{identifier}/{identifier}-{variant}.svg", self.asset_base))
    }

    /// Display name for an exact catalog key.
    pub fn get_display_name(&self, identifier: &str) -> Option<&'a str> {
        self.catalog.get(identifier).map(|entry| entry.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn entry(id: &str, name: &str, tags: &[&str], variants: &[&str]) -> CatalogEntry {
        CatalogEntry::new(
            id,
            name,
            tags.iter().map(|s| s.to_string()).collect(),
            variants.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn mock_catalog() -> Catalog {
        Catalog::from_entries(vec![
            entry("nodejs", "Node.js", &["runtime", "server"], &["original", "plain"]),
            entry("python", "Python", &["programming", "language"], &["plain", "original"]),
            entry("rust", "Rust", &["programming", "language", "systems"], &["original"]),
            entry("django", "Django", &["framework", "python"], &["plain", "line"]),
            entry("cplusplus", "C++", &["programming", "language"], &["line"]),
        ])
        .expect("valid mock catalog")
    }

    fn mock_aliases() -> AliasTable {
        AliasTable::from_rules([
            (vec!["node", "node.js"], "nodejs"),
            (vec!["py", "python3"], "python"),
            (vec!["py"], "django"),
            (vec!["rs"], "rustlang"),
        ])
    }

    #[test]
    fn test_direct_match() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        let resolution = resolver.resolve("  Python ").expect("python resolves");
        assert_eq!(resolution.identifier, "python");
        assert_eq!(resolution.kind, MatchKind::Direct);
    }

    #[test]
    fn test_alias_match_first_rule_wins() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        let resolution = resolver.resolve("PY").expect("py resolves");
        assert_eq!(resolution.identifier, "python");
        assert_eq!(resolution.kind, MatchKind::Alias);
    }

    #[test]
    fn test_alias_target_missing_from_catalog_is_returned() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve_identifier("rs"), Some("rustlang"));
        assert_eq!(resolver.build_asset_url("rustlang"), None);
        assert_eq!(resolver.get_display_name("rustlang"), None);
    }

    #[test]
    fn test_fallback_scans_in_catalog_order() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        // Both python and rust carry the tag; python comes first
        let resolution = resolver.resolve("programming").expect("tag match");
        assert_eq!(resolution.identifier, "python");
        assert_eq!(resolution.kind, MatchKind::Fallback);

        // Display name substring
        assert_eq!(resolver.resolve_identifier("jang"), Some("django"));
        // Tag substring
        assert_eq!(resolver.resolve_identifier("system"), Some("rust"));
    }

    #[test]
    fn test_fallback_treats_key_literally() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve_identifier("c++"), Some("cplusplus"));
        assert_eq!(resolver.resolve_identifier("node."), Some("nodejs"));
        assert_eq!(resolver.resolve_identifier(".*"), None);
        assert_eq!(resolver.resolve_identifier("(["), None);
    }

    #[test]
    fn test_empty_and_absent_input() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve_identifier(""), None);
        assert_eq!(resolver.resolve_identifier("   "), None);
        assert_eq!(resolver.resolve_identifier("\t\n"), None);
        assert_eq!(resolver.resolve_optional(None), None);
        assert_eq!(resolver.resolve_optional(Some("node")), Some("nodejs"));
    }

    #[test]
    fn test_no_match() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve("cobol"), None);
    }

    #[test]
    fn test_internal_whitespace_is_kept() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve_identifier("node js"), None);
        assert_eq!(resolver.resolve_identifier("py thon"), None);
    }

    #[test]
    fn test_select_variant_prefers_original() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.select_variant("python"), Some("original"));
        assert_eq!(resolver.select_variant("django"), Some("plain"));
        assert_eq!(resolver.select_variant("cplusplus"), Some("line"));
        assert_eq!(resolver.select_variant("missing"), None);
    }

    #[test]
    fn test_build_asset_url() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases).with_asset_base("https://icons.example.com/");

        assert_eq!(
            resolver.build_asset_url("python").as_deref(),
            Some("https://icons.example.com/python/python-original.svg")
        );
        assert_eq!(
            resolver.build_asset_url("django").as_deref(),
            Some("https://icons.example.com/django/django-plain.svg")
        );
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.resolve_identifier("\u{feff}Rust"), Some("rust"));
        assert_eq!(resolver.resolve_identifier(" node.js\u{feff} "), Some("nodejs"));
        assert_eq!(resolver.resolve_identifier("\u{feff}"), None);
    }

    #[test]
    fn test_asset_base_drops_all_trailing_slashes() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases).with_asset_base("https://icons.example.com//");

        assert_eq!(resolver.asset_base(), "https://icons.example.com");
        assert_eq!(
            resolver.build_asset_url("rust").as_deref(),
            Some("https://icons.example.com/rust/rust-original.svg")
        );
    }

    #[test]
    fn test_build_asset_url_requires_exact_key() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.build_asset_url(""), None);
        assert_eq!(resolver.build_asset_url("Python"), None);
        assert_eq!(resolver.build_asset_url(" python"), None);
        assert_eq!(resolver.build_asset_url("nonexistent-id"), None);
    }

    #[test]
    fn test_get_display_name() {
        let catalog = mock_catalog();
        let aliases = mock_aliases();
        let resolver = NameResolver::new(&catalog, &aliases);

        assert_eq!(resolver.get_display_name("cplusplus"), Some("C++"));
        assert_eq!(resolver.get_display_name("CPLUSPLUS"), None);
        assert_eq!(resolver.get_display_name(""), None);
    }

    #[test]
    fn test_default_asset_base() {
        let resolver = NameResolver::builtin();
        assert_eq!(resolver.asset_base(), DEFAULT_ASSET_BASE_URL);
    }
}
