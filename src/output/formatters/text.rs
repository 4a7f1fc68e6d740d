//! Default text output formatter with colors

use crate::aliases::AliasTable;
use crate::output::{IconReport, OutputFormatter};
use crate::resolver::NameResolver;
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
    explain: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            use_colors: true,
            explain: false,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self {
            use_colors: false,
            explain: false,
        }
    }

    /// Show which matching stage produced each identifier
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_reports(&self, reports: &[IconReport]) -> String {
        let mut output = String::new();

        for report in reports {
            let Some(identifier) = report.identifier.as_deref() else {
                output.push_str(&format!(
                    "{}: {}\n",
                    report.input,
                    self.paint("no icon found", |s| s.red())
                ));
                continue;
            };

            // Format: input -> identifier (Display Name) url [stage]
            let mut line = format!("{} -> {}", report.input, self.paint(identifier, |s| s.green().bold()));
            match report.display_name.as_deref() {
                Some(name) => line.push_str(&format!(" ({name})")),
                None => line.push_str(&format!(" {}", self.paint("(not in catalog)", |s| s.yellow()))),
            }
            if let Some(url) = report.url.as_deref() {
                line.push(' ');
                line.push_str(&self.paint(url, |s| s.blue().underline()));
            }
            if self.explain
                && let Some(kind) = report.match_kind
            {
                line.push_str(&format!(" [{kind}]"));
            }
            output.push_str(&line);
            output.push('\n');
        }

        output
    }

    fn format_catalog(&self, resolver: &NameResolver<'_>) -> String {
        let catalog = resolver.catalog();
        let width = catalog.identifiers().map(str::len).max().unwrap_or(0);
        let mut output = String::new();

        for entry in catalog.iter() {
            output.push_str(&format!(
                "{}  {}  [{}]\n",
                self.paint(&format!("{:width$}", entry.identifier()), |s| s.cyan()),
                entry.display_name(),
                entry.render_variants().join(", ")
            ));
        }
        output.push_str(&format!("\n{} icons\n", catalog.len()));

        output
    }

    fn format_aliases(&self, aliases: &AliasTable) -> String {
        let mut output = String::new();

        for rule in aliases.rules() {
            let spellings: Vec<String> = rule.aliases().iter().map(|a| format!("{a:?}")).collect();
            output.push_str(&format!(
                "{} -> {}\n",
                spellings.join(", "),
                self.paint(rule.target(), |s| s.green())
            ));
        }

        output
    }
}
