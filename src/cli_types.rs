use clap::Args;
use climate_subset_lib::{DescriptionStyle, Tool};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Include Phan converter
    #[arg(long)]
    pub phan: bool,

    /// Location of the Phan JSON report (default: phan.json)
    #[arg(long, value_name = "PATH")]
    pub phan_json_file: Option<PathBuf>,

    /// Include PHP_CodeSniffer converter
    #[arg(long = "php_codesniffer", visible_alias = "php-codesniffer")]
    pub php_codesniffer: bool,

    /// Location of the PHP_CodeSniffer JSON report (default: php_codesniffer.json)
    #[arg(
        long = "php_codesniffer-json-file",
        visible_alias = "php-codesniffer-json-file",
        value_name = "PATH"
    )]
    pub php_codesniffer_json_file: Option<PathBuf>,

    /// Include PHPLint converter
    #[arg(long)]
    pub phplint: bool,

    /// Location of the PHPLint JSON report (default: phplint.json)
    #[arg(long, value_name = "PATH")]
    pub phplint_json_file: Option<PathBuf>,

    /// Include PHPMD converter
    #[arg(long)]
    pub phpmd: bool,

    /// Location of the PHPMD JSON report (default: phpmd.json)
    #[arg(long, value_name = "PATH")]
    pub phpmd_json_file: Option<PathBuf>,

    /// Include PHPStan converter
    #[arg(long)]
    pub phpstan: bool,

    /// Location of the PHPStan JSON report (default: phpstan.json)
    #[arg(long, value_name = "PATH")]
    pub phpstan_json_file: Option<PathBuf>,

    /// Include Psalm converter
    #[arg(long)]
    pub psalm: bool,

    /// Location of the Psalm JSON report (default: psalm.json)
    #[arg(long, value_name = "PATH")]
    pub psalm_json_file: Option<PathBuf>,

    /// Where to write the Code Climate JSON (default: code-climate.json)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How issue descriptions are built from tool messages
    #[arg(long, value_enum)]
    pub description_style: Option<DescriptionStyle>,

    /// Indent the generated JSON
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file path (default: .climate-subset.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore any configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}

impl ConvertArgs {
    /// Whether the tool was enabled on the command line, and its report override
    pub fn tool_flag(&self, tool: Tool) -> (bool, Option<&Path>) {
        let (enabled, file) = match tool {
            Tool::Phan => (self.phan, &self.phan_json_file),
            Tool::PhpCodeSniffer => (self.php_codesniffer, &self.php_codesniffer_json_file),
            Tool::PhpLint => (self.phplint, &self.phplint_json_file),
            Tool::PhpMd => (self.phpmd, &self.phpmd_json_file),
            Tool::PhpStan => (self.phpstan, &self.phpstan_json_file),
            Tool::Psalm => (self.psalm, &self.psalm_json_file),
        };
        (enabled, file.as_deref())
    }
}
