//! Handlers for the `url` and `name` commands.

use colored::*;

use techicon_lib::exit_codes::exit;

use crate::settings::Settings;

/// Print the asset URL for an exact catalog identifier.
pub fn handle_url(settings: &Settings, identifier: &str) {
    match settings.resolver().build_asset_url(identifier) {
        Some(url) => println!("{url}"),
        None => not_in_catalog(identifier),
    }
}

/// Print the display name for an exact catalog identifier.
pub fn handle_name(settings: &Settings, identifier: &str) {
    match settings.resolver().get_display_name(identifier) {
        Some(name) => println!("{name}"),
        None => not_in_catalog(identifier),
    }
}

fn not_in_catalog(identifier: &str) -> ! {
    eprintln!("{}: '{}' is not a catalog identifier", "Not found".yellow().bold(), identifier);
    eprintln!("Use 'techicon resolve {identifier:?}' to look up free-form names");
    exit::not_found();
}
