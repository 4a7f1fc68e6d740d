//! Icon catalog: the immutable set of known icons keyed by identifier.
//!
//! A [`Catalog`] is built once (from the embedded devicon data or from a
//! catalog file) and never mutated afterwards. Enumeration order is insertion
//! order, which is the order entries appear in the source data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use crate::devicon_data::{DEVICON_ICONS, DEVICON_VERSION};

/// A single icon in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    identifier: String,
    display_name: String,
    tags: Vec<String>,
    render_variants: Vec<String>,
    /// Lowercased display name followed by lowercased tags
    #[serde(skip)]
    haystacks: Vec<String>,
}

impl CatalogEntry {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        tags: Vec<String>,
        render_variants: Vec<String>,
    ) -> Self {
        let display_name = display_name.into();
        let haystacks = std::iter::once(display_name.to_lowercase())
            .chain(tags.iter().map(|tag| tag.to_lowercase()))
            .collect();
        Self {
            identifier: identifier.into(),
            display_name,
            tags,
            render_variants,
            haystacks,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Render variants in fallback priority order. Never empty for an entry
    /// held by a [`Catalog`].
    pub fn render_variants(&self) -> &[String] {
        &self.render_variants
    }

    /// Check whether the display name or any tag contains `needle` as a
    /// literal substring. `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.haystacks.iter().any(|haystack| haystack.contains(needle))
    }
}

/// Errors that can occur when building or loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// The catalog content is not valid JSON of a supported shape
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Catalog entry has an empty identifier")]
    EmptyIdentifier,

    #[error("Invalid identifier '{0}': identifiers must be lowercase and contain no whitespace")]
    InvalidIdentifier(String),

    #[error("Duplicate identifier '{0}' in catalog")]
    DuplicateIdentifier(String),

    #[error("Icon '{0}' has no render variants")]
    NoRenderVariants(String),
}

/// Record shape of the lookup-map catalog format:
/// `{ "python": { "name": "Python", "tags": [...], "svgVersions": [...] } }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupRecord {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    svg_versions: Vec<String>,
}

/// Record shape of the upstream devicon manifest (`devicon.json`).
#[derive(Debug, Deserialize)]
struct DeviconRecord {
    name: String,
    #[serde(default)]
    altnames: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    versions: DeviconVersions,
}

#[derive(Debug, Deserialize)]
struct DeviconVersions {
    #[serde(default)]
    svg: Vec<String>,
}

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = DEVICON_ICONS.iter().map(|&(identifier, name, tags, variants)| {
        CatalogEntry::new(
            identifier,
            name,
            tags.iter().map(|tag| tag.to_string()).collect(),
            variants.iter().map(|variant| variant.to_string()).collect(),
        )
    });
    let catalog = Catalog::from_entries(entries).expect("embedded devicon data is a valid catalog");
    log::debug!("Built-in catalog: {} icons from devicon v{DEVICON_VERSION}", catalog.len());
    catalog
});

/// Read-only mapping from identifier to [`CatalogEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, validating identifiers and render variants.
    ///
    /// Entries keep the order they are yielded in.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut map = IndexMap::new();
        for entry in entries {
            validate_entry(&entry)?;
            if map.contains_key(entry.identifier()) {
                return Err(CatalogError::DuplicateIdentifier(entry.identifier));
            }
            map.insert(entry.identifier.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// The devicon catalog compiled into the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Parse the lookup-map format: a JSON object keyed by identifier.
    pub fn from_lookup_json(json: &str) -> Result<Self, CatalogError> {
        let records: IndexMap<String, LookupRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_entries(
            records
                .into_iter()
                .map(|(identifier, record)| CatalogEntry::new(identifier, record.name, record.tags, record.svg_versions)),
        )
    }

    /// Parse the upstream devicon manifest: a JSON array of icons where
    /// `name` is the identifier.
    ///
    /// The manifest carries no display name, so one is derived from the
    /// identifier. Alternative names are searched like tags.
    pub fn from_devicon_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<DeviconRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_entries(records.into_iter().map(|record| {
            let display_name = display_name_from_identifier(&record.name);
            let mut tags = record.tags;
            tags.extend(record.altnames);
            CatalogEntry::new(record.name, display_name, tags, record.versions.svg)
        }))
    }

    /// Parse either supported JSON format, picked by the top-level shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        match json.trim_start().chars().next() {
            Some('{') => Self::from_lookup_json(json),
            Some('[') => Self::from_devicon_json(json),
            _ => Err(CatalogError::ParseError(
                "expected a JSON object (lookup map) or array (devicon manifest)".to_string(),
            )),
        }
    }

    /// Load a catalog file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let catalog = Self::from_json(&content)?;
        log::debug!("Loaded {} icons from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn validate_entry(entry: &CatalogEntry) -> Result<(), CatalogError> {
    let identifier = entry.identifier();
    if identifier.is_empty() {
        return Err(CatalogError::EmptyIdentifier);
    }
    if identifier.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
        return Err(CatalogError::InvalidIdentifier(identifier.to_string()));
    }
    if entry.render_variants().is_empty() {
        return Err(CatalogError::NoRenderVariants(identifier.to_string()));
    }
    Ok(())
}

/// "python" -> "Python"
fn display_name_from_identifier(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
