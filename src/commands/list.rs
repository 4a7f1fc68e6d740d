//! Handlers for the `list` and `aliases` commands.

use colored::*;

use techicon_lib::AliasTable;
use techicon_lib::exit_codes::exit;
use techicon_lib::output::{OutputFormat, write_output};

use crate::settings::Settings;

/// List every catalog icon in catalog order.
pub fn handle_list(settings: &Settings, format: OutputFormat) {
    let resolver = settings.resolver();
    write_or_exit(&format.create_formatter(false).format_catalog(&resolver));
}

/// List the built-in alias rules in priority order.
pub fn handle_aliases(format: OutputFormat) {
    write_or_exit(&format.create_formatter(false).format_aliases(AliasTable::builtin()));
}

fn write_or_exit(content: &str) {
    if let Err(e) = write_output(content) {
        eprintln!("{}: Failed to write output: {}", "Error".red().bold(), e);
        exit::tool_error();
    }
}
