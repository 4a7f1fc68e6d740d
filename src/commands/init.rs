//! Handler for the `init` command.

use colored::*;
use std::path::Path;

use techicon_lib::config::{CONFIG_FILES, create_default_config};
use techicon_lib::exit_codes::exit;

/// Write a default `.techicon.toml` unless one already exists.
pub fn handle_init() {
    let path = Path::new(CONFIG_FILES[0]);
    match create_default_config(path) {
        Ok(true) => println!("Created default configuration file: {}", path.display()),
        Ok(false) => {
            eprintln!(
                "{}: Configuration file {} already exists",
                "Error".red().bold(),
                path.display()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
