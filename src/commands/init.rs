//! Handler for the `init` command.

use colored::*;

use climate_subset_lib::exit_codes::exit;
use climate_subset_lib::init::create_default_config;

/// Handle the init command: write a default configuration file unless one exists.
pub fn handle_init(path: &str) {
    match create_default_config(path) {
        Ok(true) => {
            println!("Created default configuration file: {path}");
        }
        Ok(false) => {
            eprintln!(
                "{}: Configuration file already exists at {}",
                "Error".red().bold(),
                path
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
