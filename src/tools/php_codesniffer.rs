//! PHP_CodeSniffer (`phpcs --report=json`)
//!
//! ```json
//! {"totals": {...}, "files": {"src/Foo.php": {"errors": 1, "warnings": 0,
//!   "messages": [{"message": "...", "source": "...", "line": 10, "column": 5}]}}}
//! ```

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, child_path, entry_path, index_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpCodeSnifferValidator;

impl SchemaValidator for PhpCodeSnifferValidator {
    fn tool(&self) -> Tool {
        Tool::PhpCodeSniffer
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());
        let root = shape.object(report, ROOT)?;
        let files_at = child_path(ROOT, "files");
        let files = shape.object_key(root, "files", ROOT)?;

        for (path, file) in files {
            let file_at = entry_path(&files_at, path);
            let file = shape.object(file, &file_at)?;
            let messages_at = child_path(&file_at, "messages");
            for (index, message) in shape.array_key(file, "messages", &file_at)?.iter().enumerate() {
                let message_at = index_path(&messages_at, index);
                let message = shape.object(message, &message_at)?;
                shape.keys(message, &["message", "line"], &message_at)?;
            }
        }

        Ok(())
    }
}

pub struct PhpCodeSnifferConverter {
    validator: PhpCodeSnifferValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PhpCodeSnifferConverter {
    pub fn new(validator: PhpCodeSnifferValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PhpCodeSnifferConverter {
    fn tool(&self) -> Tool {
        Tool::PhpCodeSniffer
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        let files = self.report["files"].as_object().into_iter().flatten();
        for (path, file) in files {
            let messages = file["messages"].as_array().into_iter().flatten();
            for (index, node) in messages.enumerate() {
                let finding = Finding::new(self.tool(), path, index, node);
                collector.push(finding.string("message")?, path, finding.line("line")?);
            }
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}
