//! PHPMD (`phpmd <paths> json <rulesets>`)
//!
//! ```json
//! {"version": "@project.version@", "package": "phpmd", "timestamp": "...",
//!  "files": [{"file": "/app/src/Foo.php", "violations": [
//!     {"beginLine": 12, "endLine": 40, "description": "...", "rule": "CyclomaticComplexity", "priority": 3}]}]}
//! ```

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter, file_label};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, child_path, index_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhpMdValidator;

impl SchemaValidator for PhpMdValidator {
    fn tool(&self) -> Tool {
        Tool::PhpMd
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());
        let root = shape.object(report, ROOT)?;
        let files_at = child_path(ROOT, "files");

        for (file_index, file) in shape.array_key(root, "files", ROOT)?.iter().enumerate() {
            let file_at = index_path(&files_at, file_index);
            let file = shape.object(file, &file_at)?;
            shape.key(file, "file", &file_at)?;

            let violations_at = child_path(&file_at, "violations");
            for (index, violation) in shape.array_key(file, "violations", &file_at)?.iter().enumerate() {
                let violation_at = index_path(&violations_at, index);
                let violation = shape.object(violation, &violation_at)?;
                shape.keys(violation, &["description", "beginLine"], &violation_at)?;
            }
        }

        Ok(())
    }
}

pub struct PhpMdConverter {
    validator: PhpMdValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PhpMdConverter {
    pub fn new(validator: PhpMdValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PhpMdConverter {
    fn tool(&self) -> Tool {
        Tool::PhpMd
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        for (file_index, file) in self.report["files"].as_array().into_iter().flatten().enumerate() {
            let path = Finding::new(self.tool(), file_label(file, "file"), file_index, file).string("file")?;
            for (index, node) in file["violations"].as_array().into_iter().flatten().enumerate() {
                let finding = Finding::new(self.tool(), path, index, node);
                collector.push(finding.string("description")?, path, finding.line("beginLine")?);
            }
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(report: Value) -> SubsetResult<Vec<Issue>> {
        let mut converter = PhpMdConverter::new(PhpMdValidator, report, ConvertOptions::default());
        converter.convert_to_subset()?;
        Ok(converter.output().to_vec())
    }

    #[test]
    fn test_converts_violations_using_begin_line() {
        let issues = convert(json!({
            "version": "2.15.0",
            "package": "phpmd",
            "files": [
                {"file": "/app/src/Foo.php", "violations": [
                    {"beginLine": 12, "endLine": 40, "description": "The method bar() has a Cyclomatic Complexity of 12.",
                     "rule": "CyclomaticComplexity", "ruleSet": "Code Size Rules", "priority": 3},
                    {"beginLine": 5, "endLine": 5, "description": "Avoid unused local variables such as '$x'.",
                     "rule": "UnusedLocalVariable", "ruleSet": "Unused Code Rules", "priority": 3}
                ]},
                {"file": "/app/src/Bar.php", "violations": [
                    {"beginLine": 1, "endLine": 99, "description": "The class Bar has 21 public methods.",
                     "rule": "TooManyPublicMethods", "priority": 3}
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].path(), "/app/src/Foo.php");
        assert_eq!(issues[0].line(), 12);
        assert_eq!(issues[1].line(), 5);
        assert_eq!(issues[2].description, "The class Bar has 21 public methods.");
    }

    #[test]
    fn test_no_files() {
        assert!(convert(json!({"version": "2.15.0", "files": []})).unwrap().is_empty());
    }

    #[test]
    fn test_files_must_be_array() {
        let err = convert(json!({"files": {}})).unwrap_err();
        assert!(err.to_string().contains("at `$.files`: expected an array"));
    }

    #[test]
    fn test_violation_without_begin_line() {
        let err = convert(json!({"files": [{"file": "a.php", "violations": [{"description": "d"}]}]})).unwrap_err();
        assert!(err.to_string().contains("$.files[0].violations[0]"));
        assert!(err.to_string().contains("key `beginLine`"));
    }

    #[test]
    fn test_file_path_must_be_string() {
        let err = convert(json!({"files": [{"file": 7, "violations": []}]})).unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains("`file`"));
    }
}
