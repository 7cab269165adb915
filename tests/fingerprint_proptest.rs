use climate_subset_lib::{ConvertOptions, SubsetConverter, Tool, create_fingerprint};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn fingerprint_is_deterministic(message in ".*", path in ".*", line in any::<u64>()) {
        prop_assert_eq!(
            create_fingerprint(&message, &path, line),
            create_fingerprint(&message, &path, line)
        );
    }

    #[test]
    fn fingerprint_changes_with_each_field(
        message in "[a-zA-Z ]{1,40}",
        path in "[a-z/]{1,30}\\.php",
        line in 1u64..100_000,
    ) {
        let base = create_fingerprint(&message, &path, line);
        prop_assert_ne!(&base, &create_fingerprint(&format!("{message}!"), &path, line));
        prop_assert_ne!(&base, &create_fingerprint(&message, &format!("x{path}"), line));
        prop_assert_ne!(&base, &create_fingerprint(&message, &path, line + 1));
    }

    #[test]
    fn converter_emits_one_issue_per_message(
        files in prop::collection::vec(prop::collection::vec(("[a-zA-Z ]{1,20}", 1u64..5000), 0..5), 0..5)
    ) {
        let mut report_files = serde_json::Map::new();
        let mut expected = Vec::new();
        for (file_index, messages) in files.iter().enumerate() {
            let path = format!("src/File{file_index}.php");
            let nodes: Vec<_> = messages
                .iter()
                .map(|(message, line)| {
                    expected.push((path.clone(), message.clone(), *line));
                    json!({"message": message, "line": line})
                })
                .collect();
            report_files.insert(path, json!({"messages": nodes}));
        }

        let mut converter = Tool::PhpStan.converter(json!({"files": report_files}), ConvertOptions::default());
        converter.convert_to_subset().unwrap();

        let actual: Vec<_> = converter
            .output()
            .iter()
            .map(|issue| (issue.path().to_string(), issue.description.clone(), issue.line()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
