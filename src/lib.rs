//! Convert PHP static-analysis JSON reports into the Code Climate issue subset.
//!
//! Each supported [`Tool`] has a validator that asserts the shape of its report
//! and a converter that turns the report into [`Issue`]s. The [`Aggregator`]
//! runs the enabled converters in order and serializes the combined result.

pub mod aggregator;
pub mod config;
pub mod converter;
pub mod error;
pub mod exit_codes;
pub mod fingerprint;
pub mod init;
pub mod issue;
pub mod tool;
pub mod tools;
pub mod validator;

pub use aggregator::Aggregator;
pub use converter::{ConvertOptions, DescriptionStyle, SubsetConverter};
pub use error::{SubsetError, SubsetResult};
pub use fingerprint::create_fingerprint;
pub use issue::{Issue, Lines, Location};
pub use tool::Tool;
pub use validator::SchemaValidator;

use serde_json::Value;

/// Convert parsed reports in the given order and return the compact JSON output.
///
/// Fails on the first report that does not convert; nothing is produced then.
pub fn convert_reports(reports: Vec<(Tool, Value)>, options: ConvertOptions) -> SubsetResult<Vec<u8>> {
    let mut aggregator = Aggregator::new();
    for (tool, report) in reports {
        aggregator.add_converter(tool.converter(report, options));
    }
    aggregator.convert_to_subset()?;
    aggregator.serialized_output()
}
