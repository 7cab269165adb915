//! Structural validation of tool reports.
//!
//! A validator only asserts the shape of a report (containers and required
//! keys). Leaf value types are checked later, while converting.

use crate::error::{SubsetError, SubsetResult};
use crate::tool::Tool;
use serde_json::{Map, Value};

pub trait SchemaValidator: Send + Sync {
    fn tool(&self) -> Tool;

    /// Check that `report` has the shape this tool emits
    fn validate(&self, report: &Value) -> SubsetResult<()>;
}

/// Location of the document root in error messages
pub const ROOT: &str = "$";

/// `$.files` style path to a named child
pub fn child_path(at: &str, key: &str) -> String {
    format!("{at}.{key}")
}

/// `$.files["src/Foo.php"]` style path to a file entry
pub fn entry_path(at: &str, key: &str) -> String {
    format!("{at}[{key:?}]")
}

/// `$.messages[3]` style path to an array element
pub fn index_path(at: &str, index: usize) -> String {
    format!("{at}[{index}]")
}

/// Shape assertions that report failures as schema errors for one tool
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    tool: Tool,
}

impl Shape {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub fn object<'a>(&self, value: &'a Value, at: &str) -> SubsetResult<&'a Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| SubsetError::schema(self.tool, at, format!("an object, found {}", json_kind(value))))
    }

    pub fn array<'a>(&self, value: &'a Value, at: &str) -> SubsetResult<&'a [Value]> {
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| SubsetError::schema(self.tool, at, format!("an array, found {}", json_kind(value))))
    }

    pub fn key<'a>(&self, object: &'a Map<String, Value>, key: &str, at: &str) -> SubsetResult<&'a Value> {
        object
            .get(key)
            .ok_or_else(|| SubsetError::schema(self.tool, at, format!("key `{key}`")))
    }

    /// Required key whose value must be an object
    pub fn object_key<'a>(
        &self,
        object: &'a Map<String, Value>,
        key: &str,
        at: &str,
    ) -> SubsetResult<&'a Map<String, Value>> {
        let value = self.key(object, key, at)?;
        self.object(value, &child_path(at, key))
    }

    /// Required key whose value must be an array
    pub fn array_key<'a>(&self, object: &'a Map<String, Value>, key: &str, at: &str) -> SubsetResult<&'a [Value]> {
        let value = self.key(object, key, at)?;
        self.array(value, &child_path(at, key))
    }

    /// Require every listed key to be present
    pub fn keys(&self, object: &Map<String, Value>, keys: &[&str], at: &str) -> SubsetResult<()> {
        for key in keys {
            self.key(object, key, at)?;
        }
        Ok(())
    }

    /// A mapping from file path to entry.
    ///
    /// PHP serializes an empty associative array as `[]`, so an empty JSON
    /// array is accepted as a mapping without files.
    pub fn file_map<'a>(&self, value: &'a Value, at: &str) -> SubsetResult<Vec<(&'a str, &'a Value)>> {
        match value {
            Value::Object(map) => Ok(map.iter().map(|(path, entry)| (path.as_str(), entry)).collect()),
            Value::Array(items) if items.is_empty() => Ok(Vec::new()),
            other => Err(SubsetError::schema(
                self.tool,
                at,
                format!("an object keyed by file path, found {}", json_kind(other)),
            )),
        }
    }
}

/// Short human description of a JSON value's type for error messages
pub fn json_kind(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("the number {n}"),
        Value::String(_) => "a string".to_string(),
        Value::Array(items) if items.is_empty() => "an empty array".to_string(),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        let files = child_path(ROOT, "files");
        assert_eq!(files, "$.files");
        let entry = entry_path(&files, "src/Foo.php");
        assert_eq!(entry, "$.files[\"src/Foo.php\"]");
        assert_eq!(index_path(&child_path(&entry, "messages"), 2), "$.files[\"src/Foo.php\"].messages[2]");
    }

    #[test]
    fn test_object_rejects_other_types() {
        let shape = Shape::new(Tool::PhpStan);
        let err = shape.object(&json!([1]), ROOT).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PHPStan report does not match the expected schema at `$`: expected an object, found an array"
        );
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let shape = Shape::new(Tool::PhpCodeSniffer);
        let doc = json!({"totals": {}});
        let err = shape.key(doc.as_object().unwrap(), "files", ROOT).unwrap_err();
        assert!(err.to_string().contains("expected key `files`"));
    }

    #[test]
    fn test_file_map_accepts_empty_array() {
        let shape = Shape::new(Tool::PhpStan);
        assert!(shape.file_map(&json!([]), ROOT).unwrap().is_empty());
        assert!(shape.file_map(&json!(["a.php"]), ROOT).is_err());
        assert!(shape.file_map(&json!("a.php"), ROOT).is_err());
    }

    #[test]
    fn test_file_map_preserves_document_order() {
        let shape = Shape::new(Tool::PhpStan);
        let doc: Value = serde_json::from_str(r#"{"z.php": 1, "a.php": 2, "m.php": 3}"#).unwrap();
        let paths: Vec<_> = shape.file_map(&doc, ROOT).unwrap().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, ["z.php", "a.php", "m.php"]);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(-3)), "the number -3");
        assert_eq!(json_kind(&json!([])), "an empty array");
    }
}
