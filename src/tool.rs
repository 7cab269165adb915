//! Registry of supported analyzers.
//!
//! `Tool::ALL` fixes both the set of tools and the order in which their issues
//! appear when several are enabled. Adding a tool means adding a variant here
//! plus its validator/converter pair under `tools`.

use crate::converter::{ConvertOptions, SubsetConverter};
use crate::tools::{
    PhanConverter, PhanValidator, PhpCodeSnifferConverter, PhpCodeSnifferValidator, PhpLintConverter,
    PhpLintValidator, PhpMdConverter, PhpMdValidator, PhpStanConverter, PhpStanValidator, PsalmConverter,
    PsalmValidator,
};
use crate::validator::SchemaValidator;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Phan,
    PhpCodeSniffer,
    PhpLint,
    PhpMd,
    PhpStan,
    Psalm,
}

impl Tool {
    /// All supported tools in registration order
    pub const ALL: [Tool; 6] = [
        Tool::Phan,
        Tool::PhpCodeSniffer,
        Tool::PhpLint,
        Tool::PhpMd,
        Tool::PhpStan,
        Tool::Psalm,
    ];

    /// The tool's own spelling, used in log lines and error messages
    pub fn name(self) -> &'static str {
        match self {
            Tool::Phan => "Phan",
            Tool::PhpCodeSniffer => "PHP_CodeSniffer",
            Tool::PhpLint => "PHPLint",
            Tool::PhpMd => "PHPMD",
            Tool::PhpStan => "PHPStan",
            Tool::Psalm => "Psalm",
        }
    }

    /// Lowercased name, used for CLI flags and config tables
    pub fn option_name(self) -> &'static str {
        match self {
            Tool::Phan => "phan",
            Tool::PhpCodeSniffer => "php_codesniffer",
            Tool::PhpLint => "phplint",
            Tool::PhpMd => "phpmd",
            Tool::PhpStan => "phpstan",
            Tool::Psalm => "psalm",
        }
    }

    /// Report file read when no location is configured
    pub fn default_json_file(self) -> String {
        format!("{}.json", self.option_name())
    }

    pub fn validator(self) -> Box<dyn SchemaValidator> {
        match self {
            Tool::Phan => Box::new(PhanValidator),
            Tool::PhpCodeSniffer => Box::new(PhpCodeSnifferValidator),
            Tool::PhpLint => Box::new(PhpLintValidator),
            Tool::PhpMd => Box::new(PhpMdValidator),
            Tool::PhpStan => Box::new(PhpStanValidator),
            Tool::Psalm => Box::new(PsalmValidator),
        }
    }

    /// Build this tool's converter over a parsed report
    pub fn converter(self, report: Value, options: ConvertOptions) -> Box<dyn SubsetConverter> {
        match self {
            Tool::Phan => Box::new(PhanConverter::new(PhanValidator, report, options)),
            Tool::PhpCodeSniffer => Box::new(PhpCodeSnifferConverter::new(PhpCodeSnifferValidator, report, options)),
            Tool::PhpLint => Box::new(PhpLintConverter::new(PhpLintValidator, report, options)),
            Tool::PhpMd => Box::new(PhpMdConverter::new(PhpMdValidator, report, options)),
            Tool::PhpStan => Box::new(PhpStanConverter::new(PhpStanValidator, report, options)),
            Tool::Psalm => Box::new(PsalmConverter::new(PsalmValidator, report, options)),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s) || tool.option_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown tool: {s}"))
    }
}

impl<'de> Deserialize<'de> for Tool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Tool::from_str(&name).map_err(serde::de::Error::custom)
    }
}
