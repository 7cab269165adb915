//! PHPLint (`phplint --json`)
//!
//! Syntax errors keyed by file, at most one per file:
//!
//! ```json
//! {"status": "failure", "errors": {"src/Foo.php": {"file_name": "Foo.php", "error": "unexpected '}'", "line": 7}}}
//! ```

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, child_path, entry_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpLintValidator;

impl SchemaValidator for PhpLintValidator {
    fn tool(&self) -> Tool {
        Tool::PhpLint
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());
        let root = shape.object(report, ROOT)?;
        let errors_at = child_path(ROOT, "errors");

        for (path, error) in shape.file_map(shape.key(root, "errors", ROOT)?, &errors_at)? {
            let error_at = entry_path(&errors_at, path);
            let error = shape.object(error, &error_at)?;
            shape.keys(error, &["error", "line"], &error_at)?;
        }

        Ok(())
    }
}

pub struct PhpLintConverter {
    validator: PhpLintValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PhpLintConverter {
    pub fn new(validator: PhpLintValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PhpLintConverter {
    fn tool(&self) -> Tool {
        Tool::PhpLint
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        for (path, node) in self.report["errors"].as_object().into_iter().flatten() {
            let finding = Finding::new(self.tool(), path, 0, node);
            collector.push(finding.string("error")?, path, finding.line("line")?);
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}
