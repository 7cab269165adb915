//! Report fixtures shared by the integration tests, one realistic report per tool.
#![allow(dead_code)]

pub const PHAN: &str = r#"[
  {
    "type": "issue",
    "type_id": 11007,
    "check_name": "PhanUndeclaredVariable",
    "description": "UndefError PhanUndeclaredVariable Variable $undefined is undeclared",
    "severity": 10,
    "location": {"path": "src/Controller/HomeController.php", "lines": {"begin": 21, "end": 21}}
  }
]"#;

pub const PHP_CODESNIFFER: &str = r#"{
  "totals": {"errors": 2, "warnings": 1, "fixable": 1},
  "files": {
    "src/Foo.php": {
      "errors": 1,
      "warnings": 1,
      "messages": [
        {"message": "Missing docblock", "source": "Squiz.Commenting.FunctionComment.Missing", "severity": 5, "fixable": false, "type": "ERROR", "line": 10, "column": 5},
        {"message": "Line exceeds 120 characters; contains 131 characters", "source": "Generic.Files.LineLength.TooLong", "severity": 5, "fixable": false, "type": "WARNING", "line": 14, "column": 131}
      ]
    },
    "src/Bar.php": {
      "errors": 1,
      "warnings": 0,
      "messages": [
        {"message": "Expected 1 blank line at end of file; 2 found", "source": "PSR2.Files.EndFileNewline.TooMany", "severity": 5, "fixable": true, "type": "ERROR", "line": 33, "column": 1}
      ]
    }
  }
}"#;

pub const PHPLINT: &str = r#"{
  "status": "failure",
  "errors": {
    "src/Broken.php": {"file_name": "Broken.php", "error": "unexpected '}' in line 7", "line": 7}
  }
}"#;

pub const PHPMD: &str = r#"{
  "version": "2.15.0",
  "package": "phpmd",
  "timestamp": "2024-03-01T10:00:00+00:00",
  "files": [
    {
      "file": "src/Service/Mailer.php",
      "violations": [
        {"beginLine": 40, "endLine": 95, "package": "App\\Service", "function": "send", "class": "Mailer", "method": "send",
         "description": "The method send() has a Cyclomatic Complexity of 14. The configured cyclomatic complexity threshold is 10.",
         "rule": "CyclomaticComplexity", "ruleSet": "Code Size Rules", "externalInfoUrl": "https://phpmd.org/rules/codesize.html#cyclomaticcomplexity", "priority": 3}
      ]
    }
  ]
}"#;

pub const PHPSTAN: &str = r#"{
  "totals": {"errors": 0, "file_errors": 1},
  "files": {
    "src/Repository/UserRepository.php": {
      "errors": 1,
      "messages": [
        {"message": "Method App\\Repository\\UserRepository::find() should return App\\Entity\\User|null but returns mixed.", "line": 27, "ignorable": true}
      ]
    }
  },
  "errors": []
}"#;

pub const PSALM: &str = r#"[
  {
    "severity": "error",
    "line_from": 12,
    "line_to": 12,
    "type": "PossiblyNullReference",
    "message": "Cannot call method getName on possibly null value",
    "file_name": "src/Entity/User.php",
    "file_path": "/app/src/Entity/User.php",
    "snippet": "        return $this->profile->getName();",
    "selected_text": "getName",
    "from": 310,
    "to": 317,
    "snippet_from": 285,
    "snippet_to": 326,
    "column_from": 32,
    "column_to": 39
  }
]"#;

pub fn parse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("fixture is valid JSON")
}
