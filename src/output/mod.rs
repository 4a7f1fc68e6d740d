//! Output formatting module for techicon
//!
//! Renders resolution reports, the catalog listing and the alias table as
//! human-readable text or JSON.

use serde::Serialize;
use std::io::{self, Write};

use crate::aliases::AliasTable;
use crate::resolver::{MatchKind, NameResolver};

pub mod formatters;

pub use formatters::*;

/// Everything known about one resolved (or unresolved) input name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconReport {
    pub input: String,
    pub identifier: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub match_kind: Option<MatchKind>,
}

impl IconReport {
    /// Resolve `input` and look up the display name and asset URL of the
    /// result. An alias target missing from the catalog yields an identifier
    /// with no display name and no URL.
    pub fn build(resolver: &NameResolver<'_>, input: &str) -> Self {
        let resolution = resolver.resolve(input);
        let identifier = resolution.map(|r| r.identifier);
        Self {
            input: input.to_string(),
            identifier: identifier.map(str::to_string),
            display_name: identifier
                .and_then(|id| resolver.get_display_name(id))
                .map(str::to_string),
            url: identifier.and_then(|id| resolver.build_asset_url(id)),
            match_kind: resolution.map(|r| r.kind),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.identifier.is_some()
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format resolution reports, one per input name
    fn format_reports(&self, reports: &[IconReport]) -> String;

    /// Format every catalog entry in catalog order
    fn format_catalog(&self, resolver: &NameResolver<'_>) -> String;

    /// Format alias rules in priority order
    fn format_aliases(&self, aliases: &AliasTable) -> String;
}

/// Available output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable format with colors
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self, explain: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new().with_explain(explain)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Write formatted output to stdout, ensuring exactly one trailing newline
pub fn write_output(content: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if content.is_empty() {
        return Ok(());
    }
    writeln!(stdout, "{}", content.trim_end_matches('\n'))?;
    stdout.flush()
}
