//! JSON output formatter

use crate::aliases::AliasTable;
use crate::catalog::CatalogEntry;
use crate::output::{IconReport, OutputFormatter};
use crate::resolver::NameResolver;
use serde::Serialize;
use serde_json::{Value, json};

/// A catalog entry as listed by `techicon list --output json`
#[derive(Serialize)]
struct CatalogListing<'a> {
    #[serde(flatten)]
    entry: &'a CatalogEntry,
    url: Option<String>,
}

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reports(&self, reports: &[IconReport]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_catalog(&self, resolver: &NameResolver<'_>) -> String {
        let icons: Vec<CatalogListing<'_>> = resolver
            .catalog()
            .iter()
            .map(|entry| CatalogListing {
                entry,
                url: resolver.build_asset_url(entry.identifier()),
            })
            .collect();

        serde_json::to_string_pretty(&icons).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_aliases(&self, aliases: &AliasTable) -> String {
        let rules: Vec<Value> = aliases
            .rules()
            .iter()
            .map(|rule| {
                json!({
                    "aliases": rule.aliases(),
                    "target": rule.target(),
                })
            })
            .collect();

        serde_json::to_string_pretty(&rules).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::resolver::MatchKind;

    #[test]
    fn test_format_reports_empty() {
        let formatter = JsonFormatter::new();
        assert_eq!(formatter.format_reports(&[]), "[]");
    }

    #[test]
    fn test_format_reports_fields() {
        let formatter = JsonFormatter::new();
        let reports = vec![
            IconReport {
                input: "k8s".to_string(),
                identifier: Some("kubernetes".to_string()),
                display_name: Some("Kubernetes".to_string()),
                url: Some("https://x.example/kubernetes/kubernetes-original.svg".to_string()),
                match_kind: Some(MatchKind::Alias),
            },
            IconReport {
                input: "cobol".to_string(),
                identifier: None,
                display_name: None,
                url: None,
                match_kind: None,
            },
        ];

        let output = formatter.format_reports(&reports);
        let parsed: Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed[0]["input"], "k8s");
        assert_eq!(parsed[0]["identifier"], "kubernetes");
        assert_eq!(parsed[0]["displayName"], "Kubernetes");
        assert_eq!(parsed[0]["matchKind"], "alias");
        assert!(parsed[1]["identifier"].is_null());
        assert!(parsed[1]["url"].is_null());
    }

    #[test]
    fn test_format_catalog_keeps_order() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("zig", "Zig", vec![], vec!["original".to_string()]),
            CatalogEntry::new("ada", "Ada", vec![], vec!["plain".to_string()]),
        ])
        .expect("valid catalog");
        let aliases = AliasTable::default();
        let resolver = NameResolver::new(&catalog, &aliases).with_asset_base("https://x.example");

        let output = JsonFormatter::new().format_catalog(&resolver);
        let parsed: Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed[0]["identifier"], "zig");
        assert_eq!(parsed[0]["displayName"], "Zig");
        assert_eq!(parsed[1]["identifier"], "ada");
        assert_eq!(parsed[1]["renderVariants"], json!(["plain"]));
        assert_eq!(parsed[1]["url"], "https://x.example/ada/ada-plain.svg");
        assert!(parsed[1].get("haystacks").is_none());
    }

    #[test]
    fn test_format_aliases() {
        let aliases = AliasTable::from_rules([(vec!["k8s", "kube"], "kubernetes")]);
        let output = JsonFormatter::new().format_aliases(&aliases);
        let parsed: Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed[0]["aliases"], json!(["k8s", "kube"]));
        assert_eq!(parsed[0]["target"], "kubernetes");
    }
}
