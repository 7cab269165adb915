//! Psalm (`psalm --output-format=json`)
//!
//! ```json
//! [{"severity": "error", "line_from": 8, "line_to": 8, "type": "UndefinedVariable",
//!   "message": "Cannot find referenced variable $x", "file_name": "src/Foo.php",
//!   "file_path": "/app/src/Foo.php", "snippet": "...", "from": 120, "to": 122, "column_from": 9}]
//! ```
//!
//! `file_name` is relative to the project root and is used as the issue path.

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter, file_label};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, index_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PsalmValidator;

impl SchemaValidator for PsalmValidator {
    fn tool(&self) -> Tool {
        Tool::Psalm
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());

        for (index, node) in shape.array(report, ROOT)?.iter().enumerate() {
            let node_at = index_path(ROOT, index);
            let node = shape.object(node, &node_at)?;
            shape.keys(node, &["message", "file_name", "line_from"], &node_at)?;
        }

        Ok(())
    }
}

pub struct PsalmConverter {
    validator: PsalmValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PsalmConverter {
    pub fn new(validator: PsalmValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PsalmConverter {
    fn tool(&self) -> Tool {
        Tool::Psalm
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        for (index, node) in self.report.as_array().into_iter().flatten().enumerate() {
            let finding = Finding::new(self.tool(), file_label(node, "file_name"), index, node);
            let path = finding.string("file_name")?;
            collector.push(finding.string("message")?, path, finding.line("line_from")?);
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}
