//! Phan (`phan --output-mode=json`)
//!
//! Phan already emits Code Climate shaped issues, as a flat array:
//!
//! ```json
//! [{"type": "issue", "type_id": 11007, "check_name": "PhanUndeclaredVariable",
//!   "description": "UndefError PhanUndeclaredVariable Variable $x is undeclared",
//!   "severity": 10, "location": {"path": "src/Foo.php", "lines": {"begin": 4, "end": 4}}}]
//! ```

use crate::converter::{ConvertOptions, Finding, IssueCollector, SubsetConverter, UNKNOWN_FILE, file_label};
use crate::error::SubsetResult;
use crate::issue::Issue;
use crate::tool::Tool;
use crate::validator::{ROOT, SchemaValidator, Shape, child_path, index_path};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhanValidator;

impl SchemaValidator for PhanValidator {
    fn tool(&self) -> Tool {
        Tool::Phan
    }

    fn validate(&self, report: &Value) -> SubsetResult<()> {
        let shape = Shape::new(self.tool());

        for (index, node) in shape.array(report, ROOT)?.iter().enumerate() {
            let node_at = index_path(ROOT, index);
            let node = shape.object(node, &node_at)?;
            shape.key(node, "description", &node_at)?;

            let location_at = child_path(&node_at, "location");
            let location = shape.object_key(node, "location", &node_at)?;
            shape.key(location, "path", &location_at)?;
            let lines = shape.object_key(location, "lines", &location_at)?;
            shape.key(lines, "begin", &child_path(&location_at, "lines"))?;
        }

        Ok(())
    }
}

pub struct PhanConverter {
    validator: PhanValidator,
    report: Value,
    options: ConvertOptions,
    issues: Vec<Issue>,
}

impl PhanConverter {
    pub fn new(validator: PhanValidator, report: Value, options: ConvertOptions) -> Self {
        Self {
            validator,
            report,
            options,
            issues: Vec::new(),
        }
    }
}

impl SubsetConverter for PhanConverter {
    fn tool(&self) -> Tool {
        Tool::Phan
    }

    fn convert_to_subset(&mut self) -> SubsetResult<()> {
        self.validator.validate(&self.report)?;

        let mut collector = IssueCollector::new(self.tool(), self.options);
        for (index, node) in self.report.as_array().into_iter().flatten().enumerate() {
            let label = node.get("location").map_or(UNKNOWN_FILE, |l| file_label(l, "path"));
            let finding = Finding::new(self.tool(), label, index, node);
            let path = finding.string("location.path")?;
            collector.push(finding.string("description")?, path, finding.line("location.lines.begin")?);
        }

        self.issues = collector.finish();
        Ok(())
    }

    fn output(&self) -> &[Issue] {
        &self.issues
    }
}
