//! Handler for the `convert` command.
//!
//! Reads the enabled tools' reports, hands them to the conversion core and
//! writes the combined Code Climate report.

use anyhow::Context;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use climate_subset_lib::config::{self, Config, DEFAULT_OUTPUT};
use climate_subset_lib::exit_codes::exit;
use climate_subset_lib::{Aggregator, ConvertOptions, SubsetError, Tool};

use crate::cli_types::ConvertArgs;

/// Everything `convert` needs once CLI flags and config are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertPlan {
    /// Enabled tools and their report files, in registration order
    pub reports: Vec<(Tool, PathBuf)>,
    pub output: PathBuf,
    pub options: ConvertOptions,
    pub pretty: bool,
}

impl ConvertPlan {
    /// Merge settings with precedence CLI > config > defaults
    pub fn resolve(args: &ConvertArgs, config: &Config) -> Self {
        let config_enabled = config.enabled_tools();
        let reports = Tool::ALL
            .into_iter()
            .filter_map(|tool| {
                let (flag, file) = args.tool_flag(tool);
                if !flag && !config_enabled.contains(&tool) {
                    return None;
                }

                let tool_config = config.tool(tool);
                let path = file
                    .map(Path::to_path_buf)
                    .or_else(|| tool_config.and_then(|c| c.json_file.as_ref()).map(PathBuf::from))
                    .unwrap_or_else(|| PathBuf::from(tool.default_json_file()));
                Some((tool, path))
            })
            .collect();

        let output = args
            .output
            .clone()
            .or_else(|| config.general.output.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let description_style = args
            .description_style
            .or(config.general.description_style)
            .unwrap_or_default();

        Self {
            reports,
            output,
            options: ConvertOptions::default().with_description_style(description_style),
            pretty: args.pretty || config.general.pretty.unwrap_or(false),
        }
    }
}

/// Read and parse one tool report. Syntax errors are reported by the caller.
fn read_report(tool: Tool, path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {} report {}", tool, path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {} report {}", tool, path.display()))
}

/// Run the conversion described by `plan` and write the output file
pub fn run_convert(plan: &ConvertPlan) -> anyhow::Result<()> {
    let mut aggregator = Aggregator::new();

    for (tool, path) in &plan.reports {
        log::info!("Converting {} via {}", tool, path.display());
        let report = read_report(*tool, path)?;
        aggregator.add_converter(tool.converter(report, plan.options));
    }

    aggregator.convert_to_subset()?;

    let bytes = if plan.pretty {
        aggregator.serialized_output_pretty()?
    } else {
        aggregator.serialized_output()?
    };

    log::info!("Writing output to {}", plan.output.display());
    fs::write(&plan.output, bytes).with_context(|| format!("Failed to write output to {}", plan.output.display()))?;
    Ok(())
}

/// Handle the convert command: resolve settings, convert, and exit with the matching code.
pub fn handle_convert(args: &ConvertArgs) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match config::resolve_config(args.config.as_deref(), args.no_config, &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let plan = ConvertPlan::resolve(args, &config);
    log::debug!("Resolved conversion plan: {plan:?}");

    if let Err(err) = run_convert(&plan) {
        match err.downcast_ref::<SubsetError>() {
            Some(SubsetError::NoConvertersEnabled) => {
                eprintln!("{}: Please include at least 1 converter.", "Error".red().bold());
                exit::tool_error();
            }
            Some(SubsetError::Schema { .. } | SubsetError::Conversion { .. }) => {
                eprintln!("{}: {}", "Error".red().bold(), err);
                exit::conversion_failed();
            }
            _ => {
                eprintln!("{}: {:#}", "Error".red().bold(), err);
                exit::tool_error();
            }
        }
    }
}
