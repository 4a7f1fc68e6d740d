//! Handler for the `resolve` command.

use colored::*;

use techicon_lib::exit_codes::exit;
use techicon_lib::output::{IconReport, OutputFormat, write_output};

use crate::settings::Settings;

/// Resolve each name and print one report per name.
///
/// Exits with the not-found code when any name fails to resolve.
pub fn handle_resolve(settings: &Settings, names: &[String], format: OutputFormat, explain: bool) {
    let resolver = settings.resolver();
    let reports: Vec<IconReport> = names.iter().map(|name| IconReport::build(&resolver, name)).collect();

    let formatter = format.create_formatter(explain);
    if let Err(e) = write_output(&formatter.format_reports(&reports)) {
        eprintln!("{}: Failed to write output: {}", "Error".red().bold(), e);
        exit::tool_error();
    }

    let unresolved = reports.iter().filter(|report| !report.is_resolved()).count();
    if unresolved > 0 {
        log::debug!("{unresolved} of {} names did not resolve", reports.len());
        exit::not_found();
    }
}
