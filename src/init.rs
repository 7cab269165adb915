//!
//! This module provides initialization utilities for climate-subset, such as creating default configuration files.

use crate::config::DEFAULT_OUTPUT;
use crate::tool::Tool;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

/// Contents of a freshly generated configuration file
pub fn default_config() -> String {
    let mut content = format!(
        r#"# climate-subset configuration file

[general]
# Where to write the Code Climate report
output = "{DEFAULT_OUTPUT}"
# How descriptions are built from tool messages: "plain" or "tool-prefixed"
description-style = "plain"
# Indent the generated JSON
pretty = false
"#
    );

    for tool in Tool::ALL {
        content.push_str(&format!(
            "\n[tools.{}]\n# Include {} findings\nenabled = false\njson-file = \"{}\"\n",
            tool.option_name(),
            tool.name(),
            tool.default_json_file()
        ));
    }

    content
}

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was created, or `false` if it already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &str) -> Result<bool, InitError> {
    if Path::new(path).exists() {
        return Ok(false);
    }

    fs::write(path, default_config()).map_err(|e| InitError::IoError {
        source: e,
        path: path.to_string(),
    })?;

    Ok(true)
}
