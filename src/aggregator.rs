//! Runs every enabled converter and merges their issues into one report.

use crate::converter::SubsetConverter;
use crate::error::{SubsetError, SubsetResult};
use crate::issue::Issue;

/// Ordered set of enabled converters with all-or-nothing conversion
#[derive(Default)]
pub struct Aggregator {
    converters: Vec<Box<dyn SubsetConverter>>,
    /// Issues of the last run, `None` unless that run succeeded
    output: Option<Vec<Issue>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a converter. Adding the same tool twice converts it twice.
    pub fn add_converter(&mut self, converter: Box<dyn SubsetConverter>) {
        self.converters.push(converter);
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Convert every report in insertion order.
    ///
    /// The first failing converter aborts the run and its error is returned
    /// unchanged. Any failure discards the output, including that of earlier runs.
    pub fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.output = None;
        if self.is_empty() {
            return Err(SubsetError::NoConvertersEnabled);
        }

        let mut output = Vec::new();
        for converter in &mut self.converters {
            log::debug!("Converting {} report", converter.tool());
            converter.convert_to_subset()?;
            log::debug!("{} produced {} issue(s)", converter.tool(), converter.output().len());
            output.extend_from_slice(converter.output());
        }

        log::info!("Converted {} issue(s) from {} report(s)", output.len(), self.len());
        self.output = Some(output);
        Ok(())
    }

    /// Issues of the last successful run; empty otherwise
    pub fn output(&self) -> &[Issue] {
        self.output.as_deref().unwrap_or_default()
    }

    fn converted(&self) -> SubsetResult<&[Issue]> {
        self.output.as_deref().ok_or(SubsetError::NotConverted)
    }

    /// Compact JSON array of the converted issues
    pub fn serialized_output(&self) -> SubsetResult<Vec<u8>> {
        Ok(serde_json::to_vec(self.converted()?)?)
    }

    /// Indented JSON array of the converted issues
    pub fn serialized_output_pretty(&self) -> SubsetResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self.converted()?)?)
    }
}
