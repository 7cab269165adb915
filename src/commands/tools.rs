//! Handler for the `tools` command.

use colored::*;

use climate_subset_lib::Tool;

/// One line per supported tool: name, enable flag, report flag and default report
pub fn tool_lines() -> Vec<String> {
    Tool::ALL
        .into_iter()
        .map(|tool| {
            format!(
                "{:<16} --{:<18} --{}-json-file (default: {})",
                tool.name(),
                tool.option_name(),
                tool.option_name(),
                tool.default_json_file()
            )
        })
        .collect()
}

/// Handle the tools command: list supported tools in output order.
pub fn handle_tools() {
    println!("{}", "Supported tools:".bold());
    for line in tool_lines() {
        println!("  {line}");
    }
}
