//!
//! Configuration file support for climate-subset.
//!
//! Settings come from `.climate-subset.toml` (or a file given with `--config`);
//! command-line flags override anything set here.

use crate::converter::DescriptionStyle;
use crate::tool::Tool;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".climate-subset.toml";

/// Default location of the generated report
pub const DEFAULT_OUTPUT: &str = "code-climate.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub general: GeneralConfig,

    /// Per-tool tables, keyed by tool name as written in the file
    pub tools: BTreeMap<String, ToolConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneralConfig {
    pub output: Option<String>,
    pub description_style: Option<DescriptionStyle>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToolConfig {
    pub enabled: bool,
    pub json_file: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text. `origin` is only used in errors.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::ParseError {
            source,
            path: origin.to_string(),
        })?;
        config.check_tools(origin)?;
        Ok(config)
    }

    /// Settings for `tool`, whichever spelling the file used
    pub fn tool(&self, tool: Tool) -> Option<&ToolConfig> {
        self.tools
            .iter()
            .find(|(name, _)| Tool::from_str(name) == Ok(tool))
            .map(|(_, config)| config)
    }

    /// Tools enabled by the file, in registration order
    pub fn enabled_tools(&self) -> Vec<Tool> {
        Tool::ALL
            .into_iter()
            .filter(|tool| self.tool(*tool).is_some_and(|c| c.enabled))
            .collect()
    }

    fn check_tools(&self, origin: &str) -> Result<(), ConfigError> {
        let mut seen = Vec::new();
        for name in self.tools.keys() {
            let tool = Tool::from_str(name).map_err(|_| ConfigError::UnknownTool {
                name: name.clone(),
                path: origin.to_string(),
            })?;
            if seen.contains(&tool) {
                return Err(ConfigError::DuplicateTool {
                    tool,
                    path: origin.to_string(),
                });
            }
            seen.push(tool);
        }
        Ok(())
    }
}

/// Load a configuration file from disk
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        source,
        path: display.clone(),
    })?;
    Config::from_toml(&content, &display)
}

/// Find `.climate-subset.toml` in `dir`
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Resolve which configuration applies.
///
/// An explicit path must exist; otherwise the working directory is searched
/// unless discovery is disabled. Returns the default config when nothing is found.
pub fn resolve_config(explicit: Option<&Path>, no_config: bool, cwd: &Path) -> Result<Config, ConfigError> {
    if no_config {
        log::debug!("Configuration discovery disabled");
        return Ok(Config::default());
    }

    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(cwd),
    };

    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config file at {path}: {source}")]
    ParseError { source: toml::de::Error, path: String },

    #[error("Unknown tool `{name}` in config file at {path}")]
    UnknownTool { name: String, path: String },

    #[error("Tool {tool} is configured more than once in config file at {path}")]
    DuplicateTool { tool: Tool, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("", "test").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
[general]
output = "build/code-climate.json"
description-style = "tool-prefixed"
pretty = true

[tools.PHPStan]
enabled = true
json-file = "build/phpstan.json"

[tools.psalm]
enabled = false
"#,
            "test",
        )
        .unwrap();

        assert_eq!(config.general.output.as_deref(), Some("build/code-climate.json"));
        assert_eq!(config.general.description_style, Some(DescriptionStyle::ToolPrefixed));
        assert_eq!(config.general.pretty, Some(true));

        let phpstan = config.tool(Tool::PhpStan).unwrap();
        assert!(phpstan.enabled);
        assert_eq!(phpstan.json_file.as_deref(), Some("build/phpstan.json"));
        assert!(!config.tool(Tool::Psalm).unwrap().enabled);
        assert!(config.tool(Tool::Phan).is_none());
        assert_eq!(config.enabled_tools(), [Tool::PhpStan]);
    }

    #[test]
    fn test_enabled_tools_follow_registration_order() {
        let config = Config::from_toml(
            "[tools.psalm]\nenabled = true\n[tools.phan]\nenabled = true\n[tools.phpmd]\nenabled = true\n",
            "test",
        )
        .unwrap();
        assert_eq!(config.enabled_tools(), [Tool::Phan, Tool::PhpMd, Tool::Psalm]);
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        let err = Config::from_toml("[tools.eslint]\nenabled = true\n", "cfg.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTool { ref name, .. } if name == "eslint"));
        assert_eq!(err.to_string(), "Unknown tool `eslint` in config file at cfg.toml");
    }

    #[test]
    fn test_duplicate_tool_spellings_are_rejected() {
        let err = Config::from_toml("[tools.phpstan]\n[tools.PHPStan]\n", "cfg.toml").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTool { tool: Tool::PhpStan, .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("[general]\nformat = \"json\"\n", "cfg.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_description_style() {
        assert!(Config::from_toml("[general]\ndescription-style = \"loud\"\n", "cfg.toml").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_resolve_discovers_file_in_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[tools.phan]\nenabled = true\n").unwrap();

        let config = resolve_config(None, false, dir.path()).unwrap();
        assert_eq!(config.enabled_tools(), [Tool::Phan]);

        let config = resolve_config(None, true, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_without_file_is_default() {
        let dir = tempdir().unwrap();
        assert_eq!(resolve_config(None, false, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(resolve_config(Some(&missing), false, dir.path()).is_err());
    }
}
