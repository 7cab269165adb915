//! Conversion of validated tool reports into canonical issues.
//!
//! Each tool module implements [`SubsetConverter`]; the pieces every converter
//! shares (field extraction, description and fingerprint derivation) live here.

use crate::error::{SubsetError, SubsetResult};
use crate::fingerprint::create_fingerprint;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::json_kind;
use serde::Deserialize;
use serde_json::Value;

pub trait SubsetConverter {
    fn tool(&self) -> Tool;

    /// Validate the report and rebuild the output from it.
    ///
    /// On failure the previous output is left untouched.
    fn convert_to_subset(&mut self) -> SubsetResult<()>;

    /// Issues produced by the last successful conversion
    fn output(&self) -> &[Issue];
}

/// How issue descriptions are derived from raw tool messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptionStyle {
    /// The tool's message unchanged
    #[default]
    Plain,
    /// The message prefixed with the tool name, e.g. `(PHPStan) ...`
    ToolPrefixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub description_style: DescriptionStyle,
}

impl ConvertOptions {
    pub fn with_description_style(mut self, style: DescriptionStyle) -> Self {
        self.description_style = style;
        self
    }
}

pub fn create_description(style: DescriptionStyle, tool: Tool, message: &str) -> String {
    match style {
        DescriptionStyle::Plain => message.to_string(),
        DescriptionStyle::ToolPrefixed => format!("({}) {}", tool.name(), message),
    }
}

/// Accumulates the issues of one conversion run
pub(crate) struct IssueCollector {
    tool: Tool,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub(crate) fn new(tool: Tool, options: ConvertOptions) -> Self {
        Self {
            tool,
            options,
            issues: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, message: &str, path: &str, line: u64) {
        // Fingerprints hash the raw message so the description style never changes them
        let description = create_description(self.options.description_style, self.tool, message);
        let fingerprint = create_fingerprint(message, path, line);
        self.issues.push(Issue::new(description, fingerprint, path, line));
    }

    pub(crate) fn finish(self) -> Vec<Issue> {
        self.issues
    }
}

/// One reported message, located by file and index for error reporting
pub(crate) struct Finding<'a> {
    tool: Tool,
    file: &'a str,
    index: usize,
    node: &'a Value,
}

impl<'a> Finding<'a> {
    pub(crate) fn new(tool: Tool, file: &'a str, index: usize, node: &'a Value) -> Self {
        Self { tool, file, index, node }
    }

    /// Resolve a dotted field such as `location.lines.begin`
    fn lookup(&self, field: &'static str) -> SubsetResult<&'a Value> {
        let mut value = self.node;
        for segment in field.split('.') {
            value = value
                .get(segment)
                .ok_or_else(|| self.error(field, "field is missing".to_string()))?;
        }
        Ok(value)
    }

    pub(crate) fn string(&self, field: &'static str) -> SubsetResult<&'a str> {
        let value = self.lookup(field)?;
        value
            .as_str()
            .ok_or_else(|| self.error(field, format!("expected a string, found {}", json_kind(value))))
    }

    pub(crate) fn line(&self, field: &'static str) -> SubsetResult<u64> {
        let value = self.lookup(field)?;
        value
            .as_u64()
            .ok_or_else(|| self.error(field, format!("expected a non-negative integer, found {}", json_kind(value))))
    }

    fn error(&self, field: &'static str, reason: String) -> SubsetError {
        SubsetError::Conversion {
            tool: self.tool,
            file: self.file.to_string(),
            index: self.index,
            field,
            reason,
        }
    }
}

/// Label used for findings of flat reports whose path field is unreadable
pub(crate) const UNKNOWN_FILE: &str = "<unknown file>";

/// File label for a finding that carries its own path field
pub(crate) fn file_label<'a>(node: &'a Value, field: &str) -> &'a str {
    node.get(field).and_then(Value::as_str).unwrap_or(UNKNOWN_FILE)
}
