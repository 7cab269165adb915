//! PHPStan (`phpstan analyse --error-format=json`)
//!
//! ```json
//! {"totals": {"errors": 0, "file_errors": 1},
//!  "files": {"src/Foo.php": {"errors": 1, "messages": [{"message": "...", "line": 12, "ignorable": true}]}},
//!  "errors": []}
//! ```
//!
//! A clean run serializes `files` as `[]`.

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, child_path, entry_path, index_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpStanValidator;

impl SchemaValidator for PhpStanValidator {
    fn tool(&self) -> Tool {
        Tool::PhpStan
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());
        let root = shape.object(report, ROOT)?;
        let files_at = child_path(ROOT, "files");
        let files = shape.file_map(shape.key(root, "files", ROOT)?, &files_at)?;

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

pub struct PhpStanConverter {
    validator: PhpStanValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PhpStanConverter {
    pub fn new(validator: PhpStanValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PhpStanConverter {
    fn tool(&self) -> Tool {
        Tool::PhpStan
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        // An empty `files` array has nothing to walk
        if let Some(files) = self.report["files"].as_object() {
            for (path, file) in files {
                let messages = file["messages"].as_array().into_iter().flatten();
                for (index, node) in messages.enumerate() {
                    let finding = Finding::new(self.tool(), path, index, node);
                    collector.push(finding.string("message")?, path, finding.line("line")?);
                }
            }
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}
